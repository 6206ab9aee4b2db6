use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::RecommendationResult;

/// Company profile sent to the recommendation API.
///
/// Field names follow the upstream wire format, misspellings included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub info: CompanyInfo,
    pub name: String,
    pub notes: String,
    pub size: String,
}

/// Business details nested under `info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    pub employee_focus_priority: String,
    pub focus: Vec<String>,
    pub background: String,
    pub challenges: String,
    pub leadership_roles: Vec<String>,
    #[serde(rename = "HRIS")]
    pub hris: String,
    #[serde(rename = "PMS")]
    pub pms: String,
    pub needed_integrations: String,
    pub desired_modules: Vec<String>,
    #[serde(rename = "onboardingETA")]
    pub onboarding_eta: String,
    #[serde(rename = "neededCofiguration")]
    pub needed_configuration: String,
    pub data_privacy_requirement: String,
    #[serde(rename = "securityComplainceStandard")]
    pub security_compliance_standard: Vec<String>,
    pub other_compliance_needed: String,
    pub annual_revenue: u64,
    pub employee_count: u32,
    pub business_start_year: u16,
}

impl CompanyProfile {
    /// The development profile shipped with this build
    pub fn development() -> Self {
        let dev = || "Development".to_string();
        Self {
            info: CompanyInfo {
                employee_focus_priority: "High".to_string(),
                focus: vec!["Sales & Marketing".to_string()],
                background: dev(),
                challenges: dev(),
                leadership_roles: [
                    "Chief Human Resource Officer (CHRO)",
                    "Chief Product Officer (CPO)",
                    "Chief Data Officer (CDO)",
                    "Chief Marketing Officer (CMO)",
                    "Senior Leaders in Organizational Development",
                    "Other Leaders",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
                hris: dev(),
                pms: dev(),
                needed_integrations: dev(),
                desired_modules: Vec::new(),
                onboarding_eta: "0 Days".to_string(),
                needed_configuration: dev(),
                data_privacy_requirement: dev(),
                security_compliance_standard: vec![
                    "General Data Protection Regulation (GDPR)".to_string(),
                    "Health Insurance Portablity and Accountability Act (HIPAA)".to_string(),
                ],
                other_compliance_needed: dev(),
                annual_revenue: 50_000_000,
                employee_count: 100,
                business_start_year: 2021,
            },
            name: "Culturefy Development".to_string(),
            notes: dev(),
            size: "1000+".to_string(),
        }
    }

    /// Encodes the profile the way the API expects it inside `companyData`.
    ///
    /// The wire form is a plain JSON object string, `{"info":{...},"name":...}`,
    /// which the request body then escapes once more as a JSON string value.
    pub fn to_company_data(&self) -> RecommendationResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Request body for the recommendations endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub user_role: String,
    pub user_id: String,
    pub business_id: String,
    pub recommendation_type: String,
    /// JSON-encoded [`CompanyProfile`]
    pub company_data: String,
}

impl RecommendationRequest {
    pub fn new(
        user_role: impl Into<String>,
        user_id: impl Into<String>,
        business_id: impl Into<String>,
        recommendation_type: impl Into<String>,
        profile: &CompanyProfile,
    ) -> RecommendationResult<Self> {
        Ok(Self {
            user_role: user_role.into(),
            user_id: user_id.into(),
            business_id: business_id.into(),
            recommendation_type: recommendation_type.into(),
            company_data: profile.to_company_data()?,
        })
    }
}

/// Response body from the recommendations endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub user_role: String,
    pub user_id: String,
    pub business_id: String,
    pub recommendation_type: String,
    /// JSON-encoded company profile echoed back, possibly empty or missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_data: Option<String>,
}

/// A handled response: the top-level record plus its decoded company data
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub response: RecommendationResponse,
    pub company: Option<Value>,
}

impl Recommendation {
    /// Decodes the nested `companyData` string of a response.
    ///
    /// An empty or missing string yields no company data. So does a decoded
    /// falsy scalar: `null`, `false`, `0` or `""`. Objects and arrays always count.
    pub fn from_response(response: RecommendationResponse) -> RecommendationResult<Self> {
        let company = match response.company_data.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                Some(serde_json::from_str::<Value>(raw)?).filter(is_truthy)
            }
            _ => None,
        };

        Ok(Self { response, company })
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
