// FICHIER : src-server/src/content_store/schema/resources.rs

//! Forme attendue des enregistrements de chaque ressource.
//! Les attributs inconnus sont conservés dans `extra`.

use crate::content_store::collections::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Champs obligatoires (non vides) d'un enregistrement typé.
pub trait ResourceRecord {
    fn required_fields(&self) -> Vec<(&'static str, &str)>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub faculty: Vec<String>,
    #[serde(default)]
    pub duration: Option<String>,
    // Saisi librement dans le panneau ("₹2000", 2000...)
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceRecord for Course {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("title", &self.title), ("description", &self.description)]
    }
}

/// Vidéo (saisie manuelle ou synchronisée depuis YouTube).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceRecord for Video {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("title", &self.title)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub text: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceRecord for Announcement {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("text", &self.text)]
    }
}

/// Image de galerie ou de bandeau d'accueil.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub src: String,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceRecord for Image {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("src", &self.src)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_size: Option<Value>,
    #[serde(default)]
    pub upload_date: Option<String>,
    #[serde(default)]
    pub downloads: Option<u64>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceRecord for Download {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("title", &self.title)]
    }
}

/// Demande d'inscription déposée depuis le site public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub student_name: String,
    pub class: String,
    pub syllabus: String,
    pub school: String,
    pub guardian: String,
    pub parent_whatsapp: String,
    #[serde(default)]
    pub student_whatsapp: Option<String>,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceRecord for Admission {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("studentName", &self.student_name),
            ("class", &self.class),
            ("syllabus", &self.syllabus),
            ("school", &self.school),
            ("guardian", &self.guardian),
            ("parentWhatsapp", &self.parent_whatsapp),
            ("email", &self.email),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResourceRecord for ContactMessage {
    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ]
    }
}
