//! API request and response types

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;
use crate::models::{ActivityLevel, Goal, GoalPace, Sex, UserId};

/// Default food history page size
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u32,
    pub size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One slice of a server-side collection with boundary metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    /// Zero-based page index
    pub number: u32,
    pub size: u32,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    /// Build a page, deriving page count and boundary flags
    pub fn new(content: Vec<T>, number: u32, size: u32, total_elements: u64) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::InvalidPage("page size must be positive".to_string()));
        }
        let total_pages = total_elements.div_ceil(u64::from(size));
        let total_pages = u32::try_from(total_pages)
            .map_err(|_| DomainError::InvalidPage(format!("{} pages overflow", total_pages)))?;

        let page = Self {
            content,
            total_elements,
            total_pages,
            number,
            size,
            first: number == 0,
            last: total_pages == 0 || number + 1 == total_pages,
        };
        page.validate()?;
        Ok(page)
    }

    /// An empty first page
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size,
            first: true,
            last: true,
        }
    }

    /// Check the index and boundary flags agree with the page count
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.total_elements == 0 {
            return Ok(());
        }
        if self.number >= self.total_pages {
            return Err(DomainError::InvalidPage(format!(
                "index {} out of {} pages",
                self.number, self.total_pages
            )));
        }
        if self.first != (self.number == 0) {
            return Err(DomainError::InvalidPage(format!(
                "first flag {} disagrees with index {}",
                self.first, self.number
            )));
        }
        if self.last != (self.number + 1 == self.total_pages) {
            return Err(DomainError::InvalidPage(format!(
                "last flag {} disagrees with index {} of {}",
                self.last, self.number, self.total_pages
            )));
        }
        Ok(())
    }

    pub fn has_previous(&self) -> bool {
        !self.first
    }

    pub fn has_next(&self) -> bool {
        !self.last
    }

    /// Clamp a requested index into the valid range for this page's collection
    pub fn clamp_index(&self, requested: u32) -> u32 {
        requested.min(self.total_pages.saturating_sub(1))
    }
}

/// Onboarding payload; the service recalculates every target from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    #[validate(range(min = 1, message = "debe ser mayor que 0"))]
    pub age: u32,
    pub sex: Sex,
    #[validate(range(exclusive_min = 0.0, message = "debe ser mayor que 0"))]
    pub height_cm: f64,
    #[validate(range(exclusive_min = 0.0, message = "debe ser mayor que 0"))]
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub goal_pace: GoalPace,
}

/// Water intake to record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWaterRequest {
    pub user_id: UserId,
    pub ml: u32,
}

/// Free-text meal description; the service extracts the nutrients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogMealRequest {
    pub user_id: UserId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartFastingRequest {
    pub user_id: UserId,
    pub protocol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWeightRequest {
    pub user_id: UserId,
    pub weight_kg: f64,
}

/// Error body returned by the service on conflict or bad request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
}
