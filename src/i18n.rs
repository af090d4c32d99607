// ==========================================
// Localisation (i18n)
// ==========================================
// rust-i18n, Portuguese (pt-BR, fallback) and English
// The rust_i18n::i18n! macro is initialised in lib.rs
// ==========================================

/// Supported locales.
pub const SUPPORTED_LOCALES: &[&str] = &["pt-BR", "en"];

/// Current locale.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Sets the locale; unknown codes fall back to pt-BR.
pub fn set_locale(locale: &str) {
    if SUPPORTED_LOCALES.contains(&locale) {
        rust_i18n::set_locale(locale);
    } else {
        tracing::warn!(locale = locale, "unsupported locale, using pt-BR");
        rust_i18n::set_locale("pt-BR");
    }
}

/// Translates a key.
///
/// ```no_run
/// use livestock_manager::i18n::t;
/// let msg = t("recommendation.maintain_management");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translates a key and fills `%{name}` placeholders.
///
/// ```no_run
/// use livestock_manager::i18n::t_with_args;
/// let msg = t_with_args("projection.unavailable", &[("tag", "BR-0042")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
