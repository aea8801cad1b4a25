use dioxus::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

mod en;
mod fr;

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Fr,
    En,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::Fr, Lang::En];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" => Some(Lang::Fr),
            "en" | "en-us" | "en-gb" => Some(Lang::En),
            _ => None,
        }
    }

    fn entries(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::Fr => fr::ENTRIES,
            Lang::En => en::ENTRIES,
        }
    }
}

type Table = HashMap<&'static str, &'static str>;

fn table(lang: Lang) -> &'static Table {
    static FR: OnceLock<Table> = OnceLock::new();
    static EN: OnceLock<Table> = OnceLock::new();
    let cell = match lang {
        Lang::Fr => &FR,
        Lang::En => &EN,
    };
    cell.get_or_init(|| lang.entries().iter().copied().collect())
}

/// Look up `key` for `lang`. A key missing from that language's table is
/// returned as-is so the gap shows up on the page.
pub fn resolve(lang: Lang, key: &str) -> String {
    table(lang)
        .get(key)
        .map(|text| (*text).to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Translate a key for a given language.
pub fn t(lang: Lang, key: &str) -> String {
    resolve(lang, key)
}

/// Where the current language is read from and written to.
///
/// `Signal<Lang>` is the one used by the app: reading it inside a component
/// subscribes that component, so every view re-renders after a change.
pub trait LangSource {
    fn current(&self) -> Lang;
    fn replace(&mut self, lang: Lang);
}

impl LangSource for Signal<Lang> {
    fn current(&self) -> Lang {
        *self.read()
    }

    fn replace(&mut self, lang: Lang) {
        self.set(lang);
    }
}

/// Switch the current language. Returns `false` when `lang` was already
/// current, in which case nothing is written.
pub fn set_language<S: LangSource + ?Sized>(source: &mut S, lang: Lang) -> bool {
    if source.current() == lang {
        return false;
    }
    source.replace(lang);
    true
}

/// A key bound to a language source, resolved every time it is displayed.
#[derive(Clone, Copy)]
pub struct Localized<S> {
    source: S,
    key: &'static str,
}

impl<S> Localized<S> {
    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl<S: LangSource> fmt::Display for Localized<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&resolve(self.source.current(), self.key))
    }
}

pub fn tr<S: LangSource>(source: S, key: &'static str) -> Localized<S> {
    Localized { source, key }
}

/// Provide `Signal<Lang>` to the component tree, defaulting to French.
#[component]
pub fn I18nProvider(children: Element) -> Element {
    let lang = use_signal(|| Lang::Fr);
    use_context_provider(|| lang);

    rsx! { {children} }
}

pub fn use_lang() -> Signal<Lang> {
    if let Some(sig) = try_use_context::<Signal<Lang>>() {
        return sig;
    }

    // Fallback for SSR or mis-ordered providers to avoid panics in production.
    eprintln!("startup: missing I18nProvider context, using local Lang::Fr signal");
    use_signal(|| Lang::Fr)
}
