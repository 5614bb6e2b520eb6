use crate::domain::{customer::Customer, enquiry::Enquiry};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopSummaryDto {
    pub id: i64,
    pub shop_name: String,
    pub slug: Option<String>,
}

impl From<&Customer> for ShopSummaryDto {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.into(),
            shop_name: customer.shop_name.to_string(),
            slug: customer.slug.as_ref().map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryDto {
    pub id: i64,
    pub shop_id: i64,
    pub shop: Option<ShopSummaryDto>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub enquiry: Option<String>,
    pub referred_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl EnquiryDto {
    pub fn from_parts(enquiry: Enquiry, shop: Option<ShopSummaryDto>) -> Self {
        Self {
            id: enquiry.id.0,
            shop_id: enquiry.shop_id.into(),
            shop,
            name: enquiry.name,
            phone: enquiry.phone,
            enquiry: enquiry.enquiry,
            referred_by: enquiry.referred_by,
            created_at: enquiry.created_at,
        }
    }
}
