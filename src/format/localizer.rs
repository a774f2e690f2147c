//! The collaborator-facing text API: responses, command metadata and embed
//! styling for a given locale.
//!
//! Every method is total. A resolution miss returns the path the caller passed
//! in (without the section prefix), a formatting problem returns the
//! unformatted template, and an unusable colour returns
//! [`DEFAULT_EMBED_COLOR`].

use std::sync::Arc;

use chrono::{
    DateTime,
    Utc,
};

use super::template::{
    FormatArg,
    format_template,
};
use crate::locale::LocaleStore;

/// Colour used when `embeds.colors.<type>` is missing or not a `0x` literal.
pub const DEFAULT_EMBED_COLOR: u32 = 0x0099FF;

/// Embed styles, named after their `embeds.colors` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmbedKind {
    Info,
    Success,
    Error,
    Warning,
}

impl EmbedKind {
    /// The `embeds.colors` key for this kind.
    #[must_use]
    pub const fn color_type(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// Localized content for one embed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedEmbed {
    pub description: String,
    pub color: u32,
    pub footer: String,
    pub timestamp: DateTime<Utc>,
}

/// Resolves and formats text against a shared [`LocaleStore`].
#[derive(Debug, Clone)]
pub struct Localizer {
    /// Loaded locale documents.
    store: Arc<LocaleStore>,
}

impl Localizer {
    #[must_use]
    pub const fn new(store: Arc<LocaleStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &LocaleStore {
        &self.store
    }

    /// Resolves `section.path`, returning `fallback` on a miss.
    fn resolve_or(&self, full_path: &str, locale: &str, fallback: &str) -> String {
        self.store.lookup(full_path, locale).unwrap_or_else(|| {
            tracing::debug!(path = full_path, locale, "Localization key not found");
            fallback.to_string()
        })
    }

    /// Resolves `responses.<path>` and substitutes `args`.
    ///
    /// With no arguments the template is returned as-is (braces untouched).
    #[must_use]
    pub fn get_response(&self, path: &str, locale: &str, args: &[FormatArg]) -> String {
        let template = self.resolve_or(&format!("responses.{path}"), locale, path);
        if args.is_empty() {
            return template;
        }

        match format_template(&template, args) {
            Ok(formatted) => formatted,
            Err(error) => {
                tracing::warn!(path, locale, "Failed to format response: {error}");
                template
            }
        }
    }

    /// Resolves `commands.<path>.name`.
    #[must_use]
    pub fn get_command_name(&self, path: &str, locale: &str) -> String {
        self.resolve_or(&format!("commands.{path}.name"), locale, path)
    }

    /// Resolves `commands.<path>.description`.
    #[must_use]
    pub fn get_command_description(&self, path: &str, locale: &str) -> String {
        self.resolve_or(&format!("commands.{path}.description"), locale, path)
    }

    /// Resolves `commands.<command>.options.<option>.name`, or `option` on a miss.
    #[must_use]
    pub fn command_option_name(&self, command: &str, option: &str, locale: &str) -> String {
        self.resolve_or(&format!("commands.{command}.options.{option}.name"), locale, option)
    }

    /// Resolves `commands.<command>.options.<option>.description`, or `option` on a miss.
    #[must_use]
    pub fn command_option_description(&self, command: &str, option: &str, locale: &str) -> String {
        self.resolve_or(&format!("commands.{command}.options.{option}.description"), locale, option)
    }

    /// Resolves `commands.<command>.subcommands.<subcommand>.name`.
    #[must_use]
    pub fn subcommand_name(&self, command: &str, subcommand: &str, locale: &str) -> String {
        self.resolve_or(&format!("commands.{command}.subcommands.{subcommand}.name"), locale, subcommand)
    }

    /// Resolves `commands.<command>.subcommands.<subcommand>.description`.
    #[must_use]
    pub fn subcommand_description(&self, command: &str, subcommand: &str, locale: &str) -> String {
        self.resolve_or(
            &format!("commands.{command}.subcommands.{subcommand}.description"),
            locale,
            subcommand,
        )
    }

    /// Resolves `embeds.colors.<color_type>` as a `0x`-prefixed hex literal.
    #[must_use]
    pub fn get_embed_color(&self, color_type: &str, locale: &str) -> u32 {
        self.store
            .lookup(&format!("embeds.colors.{color_type}"), locale)
            .and_then(|value| parse_hex_color(&value))
            .unwrap_or(DEFAULT_EMBED_COLOR)
    }

    /// Resolves `embeds.footer`.
    #[must_use]
    pub fn get_embed_footer(&self, locale: &str) -> String {
        const FOOTER_PATH: &str = "embeds.footer";
        self.resolve_or(FOOTER_PATH, locale, FOOTER_PATH)
    }

    /// Builds embed content for a response.
    #[must_use]
    pub fn embed(&self, kind: EmbedKind, path: &str, locale: &str, args: &[FormatArg]) -> LocalizedEmbed {
        LocalizedEmbed {
            description: self.get_response(path, locale, args),
            color: self.get_embed_color(kind.color_type(), locale),
            footer: self.get_embed_footer(locale),
            timestamp: Utc::now(),
        }
    }

    /// The name of `locale` as written in `display_locale`.
    ///
    /// Reads `responses.language.names.<locale>`; falls back to the upper-cased
    /// code when the name is not translated.
    #[must_use]
    pub fn locale_name(&self, locale: &str, display_locale: &str) -> String {
        self.store
            .lookup(&format!("responses.language.names.{locale}"), display_locale)
            .unwrap_or_else(|| locale.to_uppercase())
    }

    /// Loaded locale codes, sorted.
    #[must_use]
    pub fn available_locales(&self) -> Vec<String> {
        self.store.available_locales()
    }

    #[must_use]
    pub fn is_locale_supported(&self, locale: &str) -> bool {
        self.store.is_locale_supported(locale)
    }

    /// Reloads every locale document.
    pub async fn reload(&self) -> usize {
        self.store.reload().await
    }
}

/// Parses a `0x`-prefixed hexadecimal colour.
#[must_use]
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let digits = value.trim().strip_prefix("0x")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Flag emoji shown next to a locale code.
#[must_use]
pub fn locale_flag(locale: &str) -> &'static str {
    match locale {
        "en" => "🇺🇸",
        "fr" => "🇫🇷",
        "es" => "🇪🇸",
        "de" => "🇩🇪",
        "it" => "🇮🇹",
        "pt" => "🇵🇹",
        "ru" => "🇷🇺",
        "ja" => "🇯🇵",
        "ko" => "🇰🇷",
        "zh" => "🇨🇳",
        _ => "🌐",
    }
}
