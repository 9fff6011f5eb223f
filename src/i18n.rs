// src/i18n.rs
use std::{env, fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Lang {
    #[default]
    En,
    Pt,
}

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Pt => "pt",
        }
    }

    /// "pt", "pt_BR.UTF-8", "pt-PT" → Portuguese; anything else → English.
    pub fn from_locale(locale: &str) -> Self {
        if locale.starts_with("pt") { Lang::Pt } else { Lang::En }
    }

    /// First non-empty of LC_ALL, LC_MESSAGES, LANG.
    pub fn detect() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .find_map(|key| env::var(key).ok().filter(|v| !v.is_empty()))
            .map(|v| Self::from_locale(&v))
            .unwrap_or_default()
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::Pt => &PT,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "pt" => Ok(Lang::Pt),
            other => Err(format!("Unknown language: {other} (expected en or pt)")),
        }
    }
}

pub struct Strings {
    pub title: &'static str,
    pub search_placeholder: &'static str,
    pub sort_default: &'static str,
    pub sort_low_high: &'static str,
    pub sort_high_low: &'static str,
    pub filter_size: &'static str,
    pub available_sizes: &'static str,
    pub no_results: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
    pub retry: &'static str,
    pub reset: &'static str,
    pub footer: &'static str,
    pub price_note: &'static str,
    pub no_image: &'static str,
    pub image_unavailable: &'static str,
    pub copy: &'static str,
    pub grid: &'static str,
    pub list: &'static str,
    pub col_name: &'static str,
    pub col_sku: &'static str,
    pub col_price: &'static str,
    pub col_sizes: &'static str,
}

static EN: Strings = Strings {
    title: "BOAS SHOP",
    search_placeholder: "Search by name...",
    sort_default: "Default",
    sort_low_high: "Low-High",
    sort_high_low: "High-Low",
    filter_size: "Filter by Size",
    available_sizes: "Available Sizes:",
    no_results: "No matching sneakers found",
    loading: "Loading inventory...",
    error: "Error loading inventory. Please try again later and contact the owner",
    retry: "Retry",
    reset: "Reset Filters",
    footer: "Boas Shop - Sneaker Inventory",
    price_note: "Prices do not include the €5 shipping increase",
    no_image: "No Image",
    image_unavailable: "Image Not Available",
    copy: "Copy",
    grid: "Grid",
    list: "List",
    col_name: "Name",
    col_sku: "SKU",
    col_price: "Price",
    col_sizes: "Sizes",
};

static PT: Strings = Strings {
    title: "BOAS SHOP",
    search_placeholder: "Pesquisar pelo nome...",
    sort_default: "Padrão",
    sort_low_high: "Menor-Maior",
    sort_high_low: "Maior-Menor",
    filter_size: "Filtrar por Tamanho",
    available_sizes: "Tamanhos Disponíveis:",
    no_results: "Nenhum tênis encontrado",
    loading: "Carregando estoque...",
    error: "Erro ao carregar estoque. Por favor tente novamente mais tarde e contacte o dono.",
    retry: "Tentar novamente",
    reset: "Redefinir Filtros",
    footer: "Boas Shop - Sneaker Inventory",
    price_note: "Preços não incluem o preço do envio que é €5",
    no_image: "Sem Imagem",
    image_unavailable: "Imagem Indisponível",
    copy: "Copiar",
    grid: "Grelha",
    list: "Lista",
    col_name: "Nome",
    col_sku: "SKU",
    col_price: "Preço",
    col_sizes: "Tamanhos",
};

impl Strings {
    pub fn sort_label(&self, mode: crate::view::SortMode) -> &'static str {
        use crate::view::SortMode::*;
        match mode {
            Default => self.sort_default,
            PriceAsc => self.sort_low_high,
            PriceDesc => self.sort_high_low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Lang;

    #[test]
    fn pt_prefix_selects_portuguese() {
        assert_eq!(Lang::from_locale("pt"), Lang::Pt);
        assert_eq!(Lang::from_locale("pt_BR.UTF-8"), Lang::Pt);
        assert_eq!(Lang::from_locale("pt-PT"), Lang::Pt);
        assert_eq!(Lang::from_locale("en_US.UTF-8"), Lang::En);
        assert_eq!(Lang::from_locale("es"), Lang::En);
        assert_eq!(Lang::from_locale(""), Lang::En);
    }

    #[test]
    fn parses_codes() {
        assert_eq!("PT".parse::<Lang>(), Ok(Lang::Pt));
        assert!("fr".parse::<Lang>().is_err());
    }
}
