//! Localized interface labels.

use crate::facet::Facet;
use crate::locale::Locale;

/// Fixed interface strings for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Dictionary {
    /// Site title.
    pub site_title: &'static str,
    /// Search box heading.
    pub search_title: &'static str,
    /// Search box placeholder.
    pub search_placeholder: &'static str,
    /// Heading of the material type facet.
    pub material_types_title: &'static str,
    /// Heading of the school type facet.
    pub school_types_title: &'static str,
    /// Heading of the competence facet.
    pub competences_title: &'static str,
    /// Heading of the topic facet.
    pub topics_title: &'static str,
    /// Heading of the content language facet.
    pub languages_title: &'static str,
    /// Heading of the CEFR facet.
    pub cefr_title: &'static str,
    /// "Show more" button.
    pub load_more: &'static str,
    /// Link from a detail page back to the overview.
    pub back_to_overview: &'static str,
    /// Previous material.
    pub previous: &'static str,
    /// Next material.
    pub next: &'static str,
    /// Word between position and total ("3 van 12").
    pub position_of: &'static str,
    /// Result count sentence for exactly one result.
    pub material_found: &'static str,
    /// Result count sentence; `{count}` is substituted.
    pub materials_found: &'static str,
    /// Contact section heading.
    pub contact_label: &'static str,
    /// License section heading.
    pub license_label: &'static str,
}

static NL: Dictionary = Dictionary {
    site_title: "Lesmaterialen",
    search_title: "Wat zoek je?",
    search_placeholder: "Zoeken op titel",
    material_types_title: "Materiaalsoorten",
    school_types_title: "Schooltypes",
    competences_title: "Competenties",
    topics_title: "Onderwerpen",
    languages_title: "Taal van de inhoud",
    cefr_title: "ERK-niveaus",
    load_more: "Toon meer",
    back_to_overview: "Terug naar overzicht",
    previous: "Vorige",
    next: "Volgende",
    position_of: "van",
    material_found: "1 lesmateriaal gevonden",
    materials_found: "{count} lesmaterialen gevonden",
    contact_label: "Contactgegevens",
    license_label: "Licentie",
};

static DE: Dictionary = Dictionary {
    site_title: "Unterrichtsmaterialien",
    search_title: "Wonach suchst du?",
    search_placeholder: "Nach Titel suchen",
    material_types_title: "Materialarten",
    school_types_title: "Schularten",
    competences_title: "Kompetenzen",
    topics_title: "Themen",
    languages_title: "Sprache",
    cefr_title: "GER-Niveaus",
    load_more: "Mehr anzeigen",
    back_to_overview: "Zurück zur Übersicht",
    previous: "Zurück",
    next: "Weiter",
    position_of: "von",
    material_found: "1 Material gefunden",
    materials_found: "{count} Materialen gefunden",
    contact_label: "Kontaktdaten",
    license_label: "Lizenz",
};

impl Dictionary {
    /// The dictionary for `locale`.
    pub fn get(locale: Locale) -> &'static Dictionary {
        match locale {
            Locale::Nl => &NL,
            Locale::De => &DE,
        }
    }

    /// Facet heading.
    pub fn facet_title(&self, facet: Facet) -> &'static str {
        match facet {
            Facet::MaterialType => self.material_types_title,
            Facet::SchoolType => self.school_types_title,
            Facet::Competence => self.competences_title,
            Facet::Topic => self.topics_title,
            Facet::Language => self.languages_title,
            Facet::Cefr => self.cefr_title,
        }
    }

    /// Result count sentence, e.g. "12 lesmaterialen gevonden".
    pub fn results_found(&self, count: usize) -> String {
        if count == 1 {
            self.material_found.to_string()
        } else {
            self.materials_found.replace("{count}", &count.to_string())
        }
    }

    /// Position label, e.g. "3 van 12".
    pub fn position(&self, current: usize, total: usize) -> String {
        format!("{current} {} {total}", self.position_of)
    }
}
