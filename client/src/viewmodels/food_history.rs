//! Paged food log history with a client-side filter
//!
//! The filter and the totals only ever see the page currently loaded.

use ginger_shared::{filter_entries, FoodLogEntry, NutrientTotals, Page, PageControls, PageRequest, UserId};
use serde::Serialize;
use tracing::debug;

use super::{Completion, ErrorPolicy, Resource};
use crate::api::DashboardApi;
use crate::error::ClientResult;
use crate::guard::Ticket;

/// What a page request was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub user_id: UserId,
    pub page: u32,
}

pub struct FoodHistoryViewModel {
    user_id: UserId,
    page_size: u32,
    page: Resource<PageContext, Page<FoodLogEntry>>,
    query: String,
}

impl FoodHistoryViewModel {
    pub fn new(user_id: UserId, page_size: u32) -> Self {
        Self {
            user_id,
            page_size: page_size.max(1),
            page: Resource::new(ErrorPolicy::Clear),
            query: String::new(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Switch user; the filter text survives, the loaded page does not
    pub fn set_user(&mut self, user_id: UserId) {
        if self.user_id == user_id {
            return;
        }
        self.user_id = user_id;
        self.page.reset();
    }

    pub fn page(&self) -> Option<&Page<FoodLogEntry>> {
        self.page.value()
    }

    pub fn error(&self) -> Option<&str> {
        self.page.error()
    }

    pub fn is_loading(&self) -> bool {
        self.page.is_loading()
    }

    /// Index of the page on screen, 0 before anything loaded
    pub fn current_index(&self) -> u32 {
        self.page.value().map_or(0, |p| p.number)
    }

    /// Start loading a page; the index is clamped to the known page count
    pub fn begin_load(&mut self, index: u32) -> Ticket<PageContext> {
        let page = match self.page.value() {
            Some(current) if current.total_pages > 0 => current.clamp_index(index),
            _ => index,
        };
        self.page.begin(PageContext {
            user_id: self.user_id,
            page,
        })
    }

    pub fn complete_load(
        &mut self,
        ticket: &Ticket<PageContext>,
        result: ClientResult<Page<FoodLogEntry>>,
    ) -> Completion {
        self.page.complete(ticket, result)
    }

    pub async fn load_page(&mut self, api: &dyn DashboardApi, index: u32) -> Completion {
        let ticket = self.begin_load(index);
        let ctx = *ticket.context();
        debug!(user_id = ctx.user_id, page = ctx.page, "Loading food history page");
        let result = api
            .food_logs(
                ctx.user_id,
                PageRequest {
                    page: ctx.page,
                    size: self.page_size,
                },
            )
            .await;
        self.complete_load(&ticket, result)
    }

    pub async fn reload(&mut self, api: &dyn DashboardApi) -> Completion {
        let index = self.current_index();
        self.load_page(api, index).await
    }

    /// Returns `None` when already on the last page
    pub async fn next(&mut self, api: &dyn DashboardApi) -> Option<Completion> {
        let current = self.page.value()?;
        if !current.has_next() {
            return None;
        }
        let index = current.number + 1;
        Some(self.load_page(api, index).await)
    }

    /// Returns `None` when already on the first page
    pub async fn previous(&mut self, api: &dyn DashboardApi) -> Option<Completion> {
        let current = self.page.value()?;
        if !current.has_previous() {
            return None;
        }
        let index = current.number.saturating_sub(1);
        Some(self.load_page(api, index).await)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn filtered(&self) -> Vec<&FoodLogEntry> {
        match self.page.value() {
            Some(page) => filter_entries(&page.content, &self.query),
            None => Vec::new(),
        }
    }

    pub fn totals(&self) -> NutrientTotals {
        NutrientTotals::from_entries(self.filtered())
    }

    /// Navigation controls; both directions are disabled while a page loads
    pub fn controls(&self) -> Option<PageControls> {
        let controls = PageControls::for_page(self.page.value()?);
        if self.page.is_loading() {
            Some(controls.locked())
        } else {
            Some(controls)
        }
    }
}
