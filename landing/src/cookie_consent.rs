use std::sync::Arc;

use crate::domain::ConsentStore;

/// The cookie notice pinned to the bottom of the page shell. Holds no state
/// beyond its own visibility; the flag itself lives in the [`ConsentStore`].
pub struct CookieBanner {
    store: Arc<dyn ConsentStore>,
    visible: bool,
}

impl CookieBanner {
    /// Reads the stored flag once. An unreadable flag counts as no consent,
    /// so the banner shows again.
    pub fn mount(store: Arc<dyn ConsentStore>) -> Self {
        let accepted = store.is_accepted().unwrap_or(false);

        Self {
            store,
            visible: !accepted,
        }
    }

    pub fn accept(&mut self) -> Result<(), anyhow::Error> {
        self.store.record_acceptance()?;
        self.visible = false;

        Ok(())
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
