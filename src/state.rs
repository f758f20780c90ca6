use crate::{
    api::{StudentApi, http::HttpStudentApi},
    config::RuntimeConfiguration,
    error::RosterResult,
    maud_conveniences::render_nav,
};
use maud::{DOCTYPE, Markup, html};
use std::{ops::Deref, sync::Arc};

/// Lets htmx swap in error fragments too, so a failed fetch shows up instead of leaving the placeholder.
const HTMX_CONFIG: &str = r#"{"responseHandling":[{"code":"204","swap":false},{"code":"[23]..","swap":true},{"code":"[45]..","swap":true,"error":true}]}"#;

#[derive(Clone, Debug)]
pub struct RosterState {
    api: Arc<dyn StudentApi>,
}

impl RosterState {
    pub fn new(config: &RuntimeConfiguration) -> RosterResult<Self> {
        let api = HttpStudentApi::new(config.api_config())?;
        Ok(Self::with_api(Arc::new(api)))
    }

    pub fn with_api(api: Arc<dyn StudentApi>) -> Self {
        Self { api }
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    meta name="htmx-config" content=(HTMX_CONFIG) {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Roster" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center text-white" {
                    (render_nav())
                    main class="w-full flex flex-col items-center p-8" {
                        (markup)
                    }
                }
            }
        }
    }
}

impl Deref for RosterState {
    type Target = dyn StudentApi;

    fn deref(&self) -> &Self::Target {
        self.api.as_ref()
    }
}
