//! Display labels for the employee views in each supported language.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

const EN: &[(&str, &str)] = &[
    ("firstName", "First Name"),
    ("lastName", "Last Name"),
    ("email", "Email"),
    ("department", "Department"),
    ("actions", "Actions"),
    ("edit", "Edit"),
    ("delete", "Delete"),
    ("search", "Search"),
    ("confirmDelete", "Are you sure you want to delete this employee?"),
    ("confirmUpdate", "Are you sure you want to update this employee?"),
    ("save", "Save"),
    ("cancel", "Cancel"),
    ("dob", "Date of Birth"),
    ("doe", "Date of Employment"),
    ("phone", "Phone Number"),
    ("countryCode", "Country Code"),
    ("phoneNumber", "Phone Number"),
    ("position", "Position"),
];

const TR: &[(&str, &str)] = &[
    ("firstName", "Ad"),
    ("lastName", "Soyad"),
    ("email", "E-posta"),
    ("department", "Departman"),
    ("actions", "İşlemler"),
    ("edit", "Düzenle"),
    ("delete", "Sil"),
    ("search", "Ara"),
    ("confirmDelete", "Bu çalışanı silmek istediğinize emin misiniz?"),
    ("confirmUpdate", "Bu çalışanı güncellemek istediğinize emin misiniz?"),
    ("save", "Kaydet"),
    ("cancel", "İptal"),
    ("dob", "Doğum Tarihi"),
    ("doe", "İşe Başlama Tarihi"),
    ("phone", "Telefon Numarası"),
    ("countryCode", "Ülke Kodu"),
    ("phoneNumber", "Telefon Numarası"),
    ("position", "Pozisyon"),
];

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// Translated label, or the key itself when no translation exists
    pub fn label<'a>(&self, key: &'a str) -> &'a str {
        let table = match self {
            Locale::En => EN,
            Locale::Tr => TR,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
            .unwrap_or(key)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "tr" => Ok(Locale::Tr),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}
