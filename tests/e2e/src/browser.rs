use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

const WAIT_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Browser {
    browser: ChromeBrowser,
}

impl Browser {
    pub fn launch() -> Result<Self> {
        let options = LaunchOptions::default_builder()
            .headless(true)
            .build()
            .map_err(|err| anyhow::anyhow!("Failed to build launch options: {err}"))?;

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

    pub fn wait_for_element(&self, selector: &str) -> Result<()> {
        self.tab.wait_for_element(selector)?;
        Ok(())
    }

    /// Evaluate a JS expression and return its JSON value (`Null` for undefined).
    pub fn eval(&self, expression: &str) -> Result<Value> {
        let result = self.tab.evaluate(expression, false)?;
        Ok(result.value.unwrap_or(Value::Null))
    }

    pub fn eval_string(&self, expression: &str) -> Result<String> {
        match self.eval(expression)? {
            Value::String(s) => Ok(s),
            other => anyhow::bail!("{expression} returned {other}, expected a string"),
        }
    }

    /// Poll `condition` until it evaluates to `true`.
    pub fn wait_until(&self, condition: &str) -> Result<()> {
        let started = Instant::now();
        while started.elapsed() < WAIT_TIMEOUT {
            if self.eval(condition)? == Value::Bool(true) {
                return Ok(());
            }
            std::thread::sleep(POLL_INTERVAL);
        }
        anyhow::bail!("timed out waiting for `{condition}`")
    }

    pub fn press_key(&self, key: &str) -> Result<()> {
        self.tab.press_key(key)?;
        Ok(())
    }
}
