//! Project, project category and portfolio catalog types.

use serde::{Deserialize, Serialize};

/// A carbon credit project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Project type, e.g. "Reforestation"
    #[serde(rename = "type")]
    pub project_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_image_url: Option<String>,
    /// UN Sustainable Development Goal numbers the project contributes to
    #[serde(default)]
    pub un_sdg_goals: Vec<u32>,
}

/// Crediting period of a project, in calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLifetime {
    pub start_year: i32,
    pub end_year: i32,
}

/// Credits issued for a project in one vintage year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditIssuance {
    pub vintage_year: i32,
    /// Total issued amount, in kg CO2e
    pub total_amount: f64,
}

/// Project detail record returned by `GET /projects/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithCreditIssuances {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default)]
    pub activity_types: Vec<String>,
    /// "Removal" or "Avoidance"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methodology: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime: Option<ProjectLifetime>,
    #[serde(default)]
    pub credit_issuances: Vec<CreditIssuance>,
}

/// Category reference embedded in impact and allocation records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCategory {
    pub id: String,
    pub name: String,
}

/// Category detail record returned by `GET /project-categories/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCategoryWithProjects {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_image_url: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// A portfolio of project categories that orders are fulfilled from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_image_url: Option<String>,
}

/// Share of a portfolio allocated to one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioCategoryAllocation {
    /// Fraction in `[0, 1]`; fractions of a portfolio sum to 1
    pub allocated_fraction: f64,
    pub category: ProjectCategoryWithProjects,
}

/// Portfolio detail record returned by `GET /portfolios/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioWithCategoryAllocations {
    #[serde(flatten)]
    pub portfolio: Portfolio,
    #[serde(default)]
    pub category_allocations: Vec<PortfolioCategoryAllocation>,
}
