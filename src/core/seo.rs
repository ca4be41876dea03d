//! Search engine metadata for the landing page

use serde::Serialize;

use super::content::{BRAND_FULL_NAME, BRAND_NAME, INSTAGRAM_LINK};

pub const PAGE_TITLE: &str = "LAFTEC - Liga Acadêmica Feminina de Tecnologia";
pub const PAGE_DESCRIPTION: &str = "A LAFTEC é a sua comunidade de tecnologia na faculdade. Ensino, extensão e pesquisa para conectar mulheres ao futuro. Inscrições abertas para o processo seletivo 2026.1.";
pub const PAGE_KEYWORDS: &str =
    "LAFTEC, liga acadêmica, mulheres na tecnologia, programação, robótica, processo seletivo";

/// schema.org `Organization` record embedded as JSON-LD
#[derive(Debug, Serialize)]
pub struct OrganizationJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    #[serde(rename = "alternateName")]
    pub alternate_name: &'static str,
    pub description: &'static str,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<&'static str>,
}

impl OrganizationJsonLd {
    pub fn laftec() -> Self {
        Self {
            context: "https://schema.org",
            kind: "Organization",
            name: BRAND_FULL_NAME,
            alternate_name: BRAND_NAME,
            description: PAGE_DESCRIPTION,
            same_as: vec![INSTAGRAM_LINK],
        }
    }

    /// Serialized form for an inline `application/ld+json` script
    pub fn to_script(&self) -> String {
        // Static string fields only; serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_ld_uses_schema_org_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&OrganizationJsonLd::laftec().to_script()).unwrap();

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "Organization");
        assert_eq!(json["alternateName"], "LAFTEC");
        assert_eq!(json["sameAs"][0], INSTAGRAM_LINK);
    }

    #[test]
    fn test_description_fits_search_snippet() {
        assert!(PAGE_DESCRIPTION.chars().count() <= 200);
    }
}
