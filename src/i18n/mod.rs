//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.
//! Column headers ("ID", "TITULO") are data labels and are not translated.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Portuguese (Brazil)
    PtBR,
}

impl Locale {
    /// Resolve a language tag such as "pt", "pt-BR" or "en"
    pub fn from_tag(tag: &str) -> Self {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        if lang.eq_ignore_ascii_case("pt") {
            Locale::PtBR
        } else {
            Locale::EnUS
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, pt))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Artigos", "Artigos"));

    // Toolbar
    map.insert("action-refresh", ("Refresh Data", "Atualizar dados"));
    map.insert("last-updated", ("Updated at", "Atualizado às"));
    map.insert("search-placeholder", ("Search all columns", "Pesquisar em todas as colunas"));

    // Banner
    map.insert("error-loading", ("Error loading data", "Erro ao carregar dados"));

    // Filters
    map.insert("filter-placeholder", ("Filter by", "Filtrar por"));
    map.insert("filter-mode-contains", ("Contains", "Contém"));
    map.insert("filter-mode-starts-with", ("Starts with", "Começa com"));

    // Pagination
    map.insert("rows-per-page", ("Rows per page", "Linhas por página"));
    map.insert("range-of", ("of", "de"));

    // Table
    map.insert("table-no-data", ("No records to display", "Nenhum registro para exibir"));
    map.insert("table-loading", ("Loading...", "Carregando..."));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, pt)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::PtBR => SharedString::from(pt),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
