//! Static template catalog for the scaffolded project.
//!
//! Every payload is a compile-time constant: no field is derived from input,
//! time, or environment, so repeated runs produce byte-identical trees.

/// Directories created before any file is written, relative to the project root.
pub const PROJECT_DIRS: [&str; 3] = ["extension/background", "extension/popup", "tests"];

#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    pub rel_path: &'static str,
    pub contents: &'static str,
}

#[derive(thiserror::Error, Debug)]
pub enum TemplateError {
    #[error("template not found: {0}")]
    NotFound(String),
}

pub fn find_template(rel_path: &str) -> Result<&'static TemplateFile, TemplateError> {
    TEMPLATES
        .iter()
        .find(|t| t.rel_path == rel_path)
        .ok_or_else(|| TemplateError::NotFound(rel_path.to_string()))
}

/// The seven files of a scaffolded project, in write order.
pub const TEMPLATES: [TemplateFile; 7] = [
    TemplateFile {
        rel_path: "extension/manifest.json",
        contents: MANIFEST_JSON,
    },
    TemplateFile {
        rel_path: "extension/content.js",
        contents: CONTENT_JS,
    },
    TemplateFile {
        rel_path: "extension/background/service-worker.js",
        contents: SERVICE_WORKER_JS,
    },
    TemplateFile {
        rel_path: "extension/popup/popup.html",
        contents: POPUP_HTML,
    },
    TemplateFile {
        rel_path: "extension/popup/popup.js",
        contents: POPUP_JS,
    },
    TemplateFile {
        rel_path: "tests/extension.spec.js",
        contents: EXTENSION_SPEC_JS,
    },
    TemplateFile {
        rel_path: "package.json",
        contents: PACKAGE_JSON,
    },
];

const MANIFEST_JSON: &str = r#"{
  "manifest_version": 3,
  "name": "my-extension",
  "version": "0.1.0",
  "description": "Scaffolded extension for automated browser testing",
  "content_scripts": [
    {
      "matches": ["<all_urls>"],
      "js": ["content.js"]
    }
  ],
  "background": {
    "service_worker": "background/service-worker.js"
  },
  "action": {
    "default_popup": "popup/popup.html"
  }
}
"#;

// The hidden marker element is what the generated Playwright test asserts on.
const CONTENT_JS: &str = r#"const marker = document.createElement("div");
marker.id = "crx-scaffold-marker";
marker.style.display = "none";
document.documentElement.appendChild(marker);

chrome.runtime.sendMessage({ type: "content-loaded", url: location.href });
"#;

const SERVICE_WORKER_JS: &str = r#"chrome.runtime.onInstalled.addListener(() => {
  console.log("extension installed");
});

chrome.runtime.onMessage.addListener((message, sender, sendResponse) => {
  if (message.type === "content-loaded") {
    sendResponse({ ok: true });
  }
  return true;
});
"#;

const POPUP_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>my-extension</title>
  </head>
  <body>
    <h1 id="status">loading</h1>
    <script src="popup.js"></script>
  </body>
</html>
"#;

const POPUP_JS: &str = r#"document.addEventListener("DOMContentLoaded", () => {
  document.getElementById("status").textContent = "ready";
});
"#;

const EXTENSION_SPEC_JS: &str = r##"const { test, expect, chromium } = require("@playwright/test");
const path = require("path");

const extensionPath = path.join(__dirname, "..", "extension");

test("content script injects the marker element", async () => {
  const context = await chromium.launchPersistentContext("", {
    headless: false,
    args: [
      `--disable-extensions-except=${extensionPath}`,
      `--load-extension=${extensionPath}`,
    ],
  });
  const page = await context.newPage();
  await page.goto("https://example.com");
  await expect(page.locator("#crx-scaffold-marker")).toHaveCount(1);
  await context.close();
});
"##;

const PACKAGE_JSON: &str = r#"{
  "name": "my-extension",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "test": "playwright test"
  },
  "devDependencies": {
    "@playwright/test": "^1.45.0"
  }
}
"#;
