use games_hub_core::activation::{NEW_CONTEXT_FEATURES, NEW_CONTEXT_TARGET};
use games_hub_core::{OpenError, UrlOpener};

/// Opens URLs through `window.open`. Only available in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
    #[cfg(target_arch = "wasm32")]
    fn open_in_new_context(&self, url: &str) -> Result<(), OpenError> {
        let window = web_sys::window().ok_or(OpenError::NoWindow)?;
        // With `noopener` the browser returns no handle, so `Ok(None)` is success.
        window
            .open_with_url_and_target_and_features(url, NEW_CONTEXT_TARGET, NEW_CONTEXT_FEATURES)
            .map(|_| ())
            .map_err(|err| OpenError::Rejected {
                url: url.to_string(),
                reason: format!("{err:?}"),
            })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_in_new_context(&self, url: &str) -> Result<(), OpenError> {
        tracing::warn!(
            url,
            target = NEW_CONTEXT_TARGET,
            features = NEW_CONTEXT_FEATURES,
            "No browser window on this platform"
        );
        Err(OpenError::Unsupported)
    }
}
