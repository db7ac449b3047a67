//! schema.org structured data for search engines.
//!
//! Field names here are parsed by exact name on the consumer side, so every
//! rename below is part of the public contract.

use once_cell::sync::Lazy;
use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

pub const BUSINESS_NAME: &str = "Makana Benefits Consulting";
pub const BUSINESS_URL: &str = "https://www.makanabenefits.com";
pub const BUSINESS_LOGO: &str = "https://www.makanabenefits.com/assets/logo.png";
pub const BUSINESS_DESCRIPTION: &str = "Independent insurance and employee benefits consulting for individuals, families and small businesses across Hawaii and the West Coast.";
pub const BUSINESS_PHONE: &str = "+1-808-555-0142";

pub const SERVED_AREAS: [&str; 5] = ["Hawaii", "California", "Nevada", "Utah", "Washington"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub address_locality: String,
    pub address_region: String,
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub telephone: String,
    pub contact_type: String,
    pub available_language: Vec<String>,
}

/// Everything an organization and a local business have in common.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationFields {
    pub name: String,
    pub url: String,
    pub logo: String,
    pub description: String,
    pub address: PostalAddress,
    pub contact_point: ContactPoint,
    pub same_as: Vec<String>,
    pub area_served: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrganizationRecord {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(flatten)]
    pub fields: OrganizationFields,
}

// Closed set of schema.org subtypes a local business may be published as.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BusinessType {
    InsuranceAgency,
    FinancialService,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusinessRecord {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: BusinessType,
    #[serde(flatten)]
    pub fields: OrganizationFields,
    pub price_range: String,
    pub geo: GeoCoordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedEntity {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub service_type: String,
    pub provider: NamedEntity,
    pub area_served: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Publisher {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub logo: ImageObject,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub author: NamedEntity,
    pub publisher: Publisher,
    pub date_published: String,
    pub date_modified: String,
    pub main_entity_of_page: WebPage,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    pub accepted_answer: Answer,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqRecord {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub main_entity: Vec<Question>,
}

/// One question/answer pair as supplied by a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

fn served_areas() -> Vec<String> {
    SERVED_AREAS.iter().map(|area| area.to_string()).collect()
}

pub static ORGANIZATION: Lazy<OrganizationRecord> = Lazy::new(|| OrganizationRecord {
    context: SCHEMA_CONTEXT,
    kind: "Organization",
    fields: OrganizationFields {
        name: BUSINESS_NAME.to_string(),
        url: BUSINESS_URL.to_string(),
        logo: BUSINESS_LOGO.to_string(),
        description: BUSINESS_DESCRIPTION.to_string(),
        address: PostalAddress {
            kind: "PostalAddress",
            address_locality: "Honolulu".to_string(),
            address_region: "HI".to_string(),
            address_country: "US".to_string(),
        },
        contact_point: ContactPoint {
            kind: "ContactPoint",
            telephone: BUSINESS_PHONE.to_string(),
            contact_type: "customer service".to_string(),
            available_language: vec!["English".to_string(), "Japanese".to_string()],
        },
        same_as: vec![
            "https://www.linkedin.com/company/makana-benefits".to_string(),
            "https://www.facebook.com/makanabenefits".to_string(),
        ],
        area_served: served_areas(),
    },
});

pub static LOCAL_BUSINESS: Lazy<LocalBusinessRecord> = Lazy::new(|| LocalBusinessRecord {
    context: SCHEMA_CONTEXT,
    kind: BusinessType::InsuranceAgency,
    fields: ORGANIZATION.fields.clone(),
    price_range: "$$".to_string(),
    geo: GeoCoordinates {
        kind: "GeoCoordinates",
        latitude: 21.3069,
        longitude: -157.8583,
    },
});

pub fn create_service_record(service_type: &str, description: &str) -> ServiceRecord {
    ServiceRecord {
        context: SCHEMA_CONTEXT,
        kind: "Service",
        service_type: service_type.to_string(),
        provider: NamedEntity {
            kind: "InsuranceAgency",
            name: BUSINESS_NAME.to_string(),
        },
        area_served: served_areas(),
        description: description.to_string(),
    }
}

/// Dates and URL are taken verbatim.
pub fn create_article_record(
    headline: &str,
    description: &str,
    date_published: &str,
    date_modified: &str,
    url: &str,
) -> ArticleRecord {
    ArticleRecord {
        context: SCHEMA_CONTEXT,
        kind: "Article",
        headline: headline.to_string(),
        description: description.to_string(),
        author: NamedEntity {
            kind: "Organization",
            name: BUSINESS_NAME.to_string(),
        },
        publisher: Publisher {
            kind: "Organization",
            name: BUSINESS_NAME.to_string(),
            logo: ImageObject {
                kind: "ImageObject",
                url: BUSINESS_LOGO.to_string(),
            },
        },
        date_published: date_published.to_string(),
        date_modified: date_modified.to_string(),
        main_entity_of_page: WebPage {
            kind: "WebPage",
            id: url.to_string(),
        },
    }
}

pub fn create_faq_record(faqs: &[Faq<'_>]) -> FaqRecord {
    FaqRecord {
        context: SCHEMA_CONTEXT,
        kind: "FAQPage",
        main_entity: faqs
            .iter()
            .map(|faq| Question {
                kind: "Question",
                name: faq.question.to_string(),
                accepted_answer: Answer {
                    kind: "Answer",
                    text: faq.answer.to_string(),
                },
            })
            .collect(),
    }
}

/// Serialize a record for embedding inside a `<script>` element.
pub fn to_json_ld<T: Serialize>(record: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(record)?;
    // "</" would let copy close the surrounding script tag early
    Ok(json.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn value_of<T: Serialize>(record: &T) -> Value {
        serde_json::to_value(record).unwrap()
    }

    #[test]
    fn empty_faq_list_yields_empty_entities() {
        let record = create_faq_record(&[]);
        assert!(record.main_entity.is_empty());
        assert_eq!(value_of(&record)["mainEntity"], json!([]));
    }

    #[test]
    fn faq_entries_keep_input_order_and_schema_tags() {
        let record = create_faq_record(&[
            Faq { question: "Q1", answer: "A1" },
            Faq { question: "Q2", answer: "A2" },
        ]);

        assert_eq!(
            value_of(&record),
            json!({
                "@context": "https://schema.org",
                "@type": "FAQPage",
                "mainEntity": [
                    {
                        "@type": "Question",
                        "name": "Q1",
                        "acceptedAnswer": { "@type": "Answer", "text": "A1" }
                    },
                    {
                        "@type": "Question",
                        "name": "Q2",
                        "acceptedAnswer": { "@type": "Answer", "text": "A2" }
                    }
                ]
            })
        );
    }

    #[test]
    fn faq_duplicates_are_kept() {
        let pair = Faq { question: "Same?", answer: "Yes" };
        let record = create_faq_record(&[pair, pair]);
        assert_eq!(record.main_entity.len(), 2);
    }

    #[test]
    fn service_record_attaches_provider_and_areas() {
        let record = create_service_record("Medicare Enrollment", "desc");
        assert_eq!(record.service_type, "Medicare Enrollment");
        assert_eq!(record.description, "desc");
        assert_eq!(
            record.area_served,
            vec!["Hawaii", "California", "Nevada", "Utah", "Washington"]
        );

        let value = value_of(&record);
        assert_eq!(value["@type"], "Service");
        assert_eq!(value["serviceType"], "Medicare Enrollment");
        assert_eq!(value["provider"]["name"], BUSINESS_NAME);
    }

    #[test]
    fn article_record_uses_schema_field_names() {
        let record = create_article_record(
            "Open enrollment checklist",
            "What to gather before November",
            "2025-03-04",
            "2025-03-10",
            "https://www.makanabenefits.com/blog/open-enrollment-checklist",
        );
        let value = value_of(&record);

        assert_eq!(value["@context"], SCHEMA_CONTEXT);
        assert_eq!(value["@type"], "Article");
        assert_eq!(value["headline"], "Open enrollment checklist");
        assert_eq!(value["datePublished"], "2025-03-04");
        assert_eq!(value["dateModified"], "2025-03-10");
        assert_eq!(value["publisher"]["logo"]["@type"], "ImageObject");
        assert_eq!(value["publisher"]["logo"]["url"], BUSINESS_LOGO);
        assert_eq!(
            value["mainEntityOfPage"]["@id"],
            "https://www.makanabenefits.com/blog/open-enrollment-checklist"
        );
    }

    #[test]
    fn article_dates_are_not_validated() {
        let record = create_article_record("h", "d", "2025-05-01", "2024-01-01", "u");
        assert_eq!(record.date_published, "2025-05-01");
        assert_eq!(record.date_modified, "2024-01-01");
    }

    #[test]
    fn local_business_extends_organization() {
        let org = value_of(&*ORGANIZATION);
        let local = value_of(&*LOCAL_BUSINESS);
        let org = org.as_object().unwrap();
        let local = local.as_object().unwrap();

        for (key, value) in org.iter().filter(|(key, _)| key.as_str() != "@type") {
            assert_eq!(local.get(key), Some(value), "field {key} differs");
        }

        assert_eq!(org["@type"], "Organization");
        assert_eq!(local["@type"], "InsuranceAgency");
        assert_eq!(local["priceRange"], "$$");
        assert_eq!(local["geo"]["@type"], "GeoCoordinates");

        let mut extra: Vec<&str> = local
            .keys()
            .filter(|key| !org.contains_key(*key))
            .map(String::as_str)
            .collect();
        extra.sort();
        assert_eq!(extra, vec!["geo", "priceRange"]);
    }

    #[test]
    fn business_types_serialize_as_schema_names() {
        assert_eq!(serde_json::to_value(BusinessType::InsuranceAgency).unwrap(), "InsuranceAgency");
        assert_eq!(serde_json::to_value(BusinessType::FinancialService).unwrap(), "FinancialService");
    }

    #[test]
    fn organization_serializes_nested_types() {
        let value = value_of(&*ORGANIZATION);
        assert_eq!(value["address"]["@type"], "PostalAddress");
        assert_eq!(value["address"]["addressRegion"], "HI");
        assert_eq!(value["contactPoint"]["@type"], "ContactPoint");
        assert_eq!(value["contactPoint"]["telephone"], BUSINESS_PHONE);
        assert_eq!(value["areaServed"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn json_ld_cannot_close_its_script_tag() {
        let record = create_faq_record(&[Faq {
            question: "Is </script> allowed?",
            answer: "No",
        }]);
        let json = to_json_ld(&record).unwrap();

        assert!(!json.contains("</script"));
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["mainEntity"][0]["name"], "Is </script> allowed?");
    }
}
