use anyhow::{anyhow, bail, Result};
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|e| anyhow!("launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self { browser })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        element.type_into(text)?;
        Ok(())
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        Ok(())
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let element = self.tab.wait_for_element(selector)?;
        Ok(element.get_attribute_value(name)?)
    }

    pub fn url(&self) -> String {
        self.tab.get_url()
    }

    /// Reads the live `disabled` property, which reflects client-side state.
    pub fn is_disabled(&self, selector: &str) -> Result<bool> {
        self.tab.wait_for_element(selector)?;
        let script = format!("document.querySelector({selector:?}).disabled");
        let result = self.tab.evaluate(&script, false)?;
        match result.value {
            Some(serde_json::Value::Bool(disabled)) => Ok(disabled),
            other => bail!("{selector} has no disabled property: {other:?}"),
        }
    }

    pub fn wait_for(&self, timeout: Duration, mut check: impl FnMut(&Self) -> bool) -> Result<()> {
        let started = Instant::now();
        while started.elapsed() < timeout {
            if check(self) {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        bail!("condition not met within {}ms", timeout.as_millis())
    }
}
