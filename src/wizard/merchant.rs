//! Online-merchant registration form
//!
//! Step 1 collects identity (name, URL, service type), step 2 the JPYC
//! use case and platforms. Custom platform text replaces the "other"
//! sentinel in the submitted row; a custom service type is recorded as a
//! labeled note inside the description.

use crate::constants::options::OTHER;
use crate::directory::{ListingStatus, NewMerchant};
use crate::store::MERCHANTS_TABLE;
use crate::wizard::{none_if_blank, none_if_empty, resolve_all, Choice, RegistrationForm, UserId};

const MSG_NAME_REQUIRED: &str = "サービス名を入力してください";
const MSG_URL_REQUIRED: &str = "URLを入力してください";
const MSG_SERVICE_TYPE_REQUIRED: &str = "サービス種別を選択してください";
const MSG_USE_CASE_REQUIRED: &str = "JPYCの利用方法を入力してください";
const MSG_PLATFORM_REQUIRED: &str = "対応プラットフォームを選択してください";

/// Draft state for registering an online merchant
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MerchantForm {
    pub name: String,
    pub url: String,
    pub description: String,
    pub service_type: Option<Choice>,
    pub jpyc_use_case: Option<Choice>,
    pub platforms: Vec<Choice>,
    pub country: String,
    pub tags: Vec<String>,
    /// Pending free-text tag, moved into `tags` by [`Self::add_tag`]
    pub tag_buffer: String,
}

impl MerchantForm {
    /// Append the tag buffer to the tag set
    ///
    /// Tags are trimmed, never blank and never duplicated. The buffer is
    /// cleared only on a successful addition.
    pub fn add_tag(&mut self) -> bool {
        let tag = self.tag_buffer.trim();
        if tag.is_empty() || self.tags.iter().any(|existing| existing == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        self.tag_buffer.clear();
        true
    }

    /// Remove a tag from the set
    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|existing| existing != tag);
    }

    fn resolved_use_case(&self) -> Option<String> {
        self.jpyc_use_case.as_ref().and_then(Choice::resolve)
    }
}

impl RegistrationForm for MerchantForm {
    type Row = NewMerchant;

    fn table(&self) -> &'static str {
        MERCHANTS_TABLE
    }

    fn validate_basic(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some(MSG_NAME_REQUIRED.to_string());
        }
        if self.url.trim().is_empty() {
            return Some(MSG_URL_REQUIRED.to_string());
        }
        if self
            .service_type
            .as_ref()
            .and_then(Choice::resolve)
            .is_none()
        {
            return Some(MSG_SERVICE_TYPE_REQUIRED.to_string());
        }
        None
    }

    fn validate_domain(&self) -> Option<String> {
        if self.resolved_use_case().is_none() {
            return Some(MSG_USE_CASE_REQUIRED.to_string());
        }
        if resolve_all(&self.platforms).is_empty() {
            return Some(MSG_PLATFORM_REQUIRED.to_string());
        }
        None
    }

    fn to_row(&self, created_by: &UserId) -> NewMerchant {
        let mut description = self.description.trim().to_string();

        // A custom service type is stored under the canonical "other"
        // column value, with the free text kept as a note in the
        // description instead of a separate column.
        let service_type = match &self.service_type {
            Some(Choice::Selected(value)) => none_if_blank(value),
            Some(Choice::Custom(text)) => {
                if let Some(text) = none_if_blank(text) {
                    if !description.is_empty() {
                        description.push('\n');
                    }
                    description.push_str("サービス種別: ");
                    description.push_str(&text);
                }
                Some(OTHER.to_string())
            }
            None => None,
        };

        NewMerchant {
            name: self.name.clone(),
            description: none_if_blank(&description),
            service_type,
            url: self.url.clone(),
            platforms: none_if_empty(resolve_all(&self.platforms)),
            jpyc_use_case: self.resolved_use_case(),
            country: none_if_blank(&self.country),
            tags: none_if_empty(self.tags.clone()),
            status: ListingStatus::Pending,
            created_by: created_by.0.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> MerchantForm {
        MerchantForm {
            name: "JPYC Books".to_string(),
            url: "https://books.example.com".to_string(),
            service_type: Some(Choice::Selected("EC・物販".to_string())),
            jpyc_use_case: Some(Choice::Selected("商品決済".to_string())),
            platforms: vec![Choice::Selected("Webサイト".to_string())],
            ..MerchantForm::default()
        }
    }

    fn user() -> UserId {
        UserId("user-123".to_string())
    }

    #[test]
    fn test_basic_validation_order() {
        let mut form = valid_form();
        form.name = String::new();
        form.url = String::new();
        assert_eq!(form.validate_basic(), Some(MSG_NAME_REQUIRED.to_string()));

        form.name = "JPYC Books".to_string();
        assert_eq!(form.validate_basic(), Some(MSG_URL_REQUIRED.to_string()));

        form.url = "https://books.example.com".to_string();
        form.service_type = None;
        assert_eq!(
            form.validate_basic(),
            Some(MSG_SERVICE_TYPE_REQUIRED.to_string())
        );
    }

    #[test]
    fn test_domain_validation_resolves_custom_use_case() {
        let mut form = valid_form();
        form.jpyc_use_case = Some(Choice::Custom("限定コンテンツ販売".to_string()));
        assert_eq!(form.validate_domain(), None);

        form.jpyc_use_case = Some(Choice::Custom("   ".to_string()));
        assert_eq!(form.validate_domain(), Some(MSG_USE_CASE_REQUIRED.to_string()));

        form.jpyc_use_case = Some(Choice::Selected("商品決済".to_string()));
        form.platforms.clear();
        assert_eq!(form.validate_domain(), Some(MSG_PLATFORM_REQUIRED.to_string()));
    }

    #[test]
    fn test_custom_platform_replaces_sentinel() {
        let mut form = valid_form();
        form.platforms = vec![Choice::Custom("Discord Bot".to_string())];

        let row = form.to_row(&user());
        let platforms = row.platforms.unwrap();
        assert!(platforms.contains(&"Discord Bot".to_string()));
        assert!(!platforms.contains(&OTHER.to_string()));
    }

    #[test]
    fn test_mixed_platforms_keep_selection_order() {
        let mut form = valid_form();
        form.platforms = vec![
            Choice::Selected("Webサイト".to_string()),
            Choice::Custom("Discord Bot".to_string()),
        ];

        let row = form.to_row(&user());
        assert_eq!(
            row.platforms,
            Some(vec!["Webサイト".to_string(), "Discord Bot".to_string()])
        );
    }

    #[test]
    fn test_custom_service_type_becomes_description_note() {
        let mut form = valid_form();
        form.description = "技術書のオンライン書店".to_string();
        form.service_type = Some(Choice::Custom("オンデマンド印刷".to_string()));

        let row = form.to_row(&user());
        assert_eq!(row.service_type, Some(OTHER.to_string()));
        assert_eq!(
            row.description,
            Some("技術書のオンライン書店\nサービス種別: オンデマンド印刷".to_string())
        );
    }

    #[test]
    fn test_custom_service_type_with_empty_description() {
        let mut form = valid_form();
        form.service_type = Some(Choice::Custom("オンデマンド印刷".to_string()));

        let row = form.to_row(&user());
        assert_eq!(
            row.description,
            Some("サービス種別: オンデマンド印刷".to_string())
        );
    }

    #[test]
    fn test_empty_tags_submit_as_absent() {
        let row = valid_form().to_row(&user());
        assert_eq!(row.tags, None);
        assert_eq!(row.country, None);
        assert_eq!(row.status, ListingStatus::Pending);
        assert_eq!(row.created_by, "user-123");
    }

    #[test]
    fn test_add_tag_trims_and_clears_buffer() {
        let mut form = valid_form();
        form.tag_buffer = "  NFT  ".to_string();
        assert!(form.add_tag());
        assert_eq!(form.tags, vec!["NFT"]);
        assert!(form.tag_buffer.is_empty());
    }

    #[test]
    fn test_add_tag_rejects_blank_and_duplicate() {
        let mut form = valid_form();
        form.tag_buffer = "   ".to_string();
        assert!(!form.add_tag());
        assert!(form.tags.is_empty());

        form.tag_buffer = "NFT".to_string();
        assert!(form.add_tag());

        // Duplicate is rejected and the buffer is kept
        form.tag_buffer = "NFT".to_string();
        assert!(!form.add_tag());
        assert_eq!(form.tags, vec!["NFT"]);
        assert_eq!(form.tag_buffer, "NFT");
    }

    #[test]
    fn test_remove_tag() {
        let mut form = valid_form();
        form.tags = vec!["NFT".to_string(), "書籍".to_string()];
        form.remove_tag("NFT");
        assert_eq!(form.tags, vec!["書籍"]);
    }

    #[test]
    fn test_tags_carry_into_row() {
        let mut form = valid_form();
        form.tags = vec!["NFT".to_string()];
        let row = form.to_row(&user());
        assert_eq!(row.tags, Some(vec!["NFT".to_string()]));
    }
}
