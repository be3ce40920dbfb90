//! Browser entry point for the todo client.

mod app;
mod browser;
mod components;
mod containers;
mod language;
mod logging;
mod models;
mod pages;
mod routes;


use app::App;
use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use language::{DEFAULT_LANGUAGE, translations};
use yew::{Html, Renderer, function_component, html};
use yewdux::YewduxRoot;

#[function_component(TranslatedApp)]
fn translated_app() -> Html {
    let config = I18nProviderConfig {
        translations: translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let payload = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        let location = info.location().map_or_else(String::new, |location| {
            format!(" at {}:{}:{}", location.file(), location.line(), location.column())
        });
        web_sys::console::error_1(&format!("Panic: {payload}{location}").into());
    }));
}

fn main() {
    install_panic_hook();
    logging::init();
    tracing::info!("starting todo client");

    Renderer::<TranslatedApp>::new().render();
}
