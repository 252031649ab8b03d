use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use super::repo::ImageFields;

fn is_allowed_image_filename(filename: &str) -> bool {
    lazy_static! {
        static ref IMAGE_EXT_RE: Regex = Regex::new(r"(?i)\.(png|jpe?g)$").unwrap();
    }
    IMAGE_EXT_RE.is_match(filename)
}

/// Create/update body for an outfit image. Used for both POST and PUT;
/// every field is resupplied on update.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertImageRequest {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub url: String,
    pub category: Option<String>,
    pub item_name: Option<String>,
    #[serde(rename = "type")]
    pub image_type: Option<String>,
}

impl UpsertImageRequest {
    pub fn into_fields(self) -> Result<ImageFields, String> {
        let filename = self.filename.trim().to_string();
        if filename.is_empty() {
            return Err("filename is required".to_string());
        }
        if !is_allowed_image_filename(&filename) {
            return Err("filename must end in .png, .jpg or .jpeg".to_string());
        }
        let url = self.url.trim().to_string();
        if url.is_empty() {
            return Err("url is required".to_string());
        }
        Ok(ImageFields {
            filename,
            url,
            category: self.category,
            item_name: self.item_name,
            image_type: self.image_type,
        })
    }
}
