use std::sync::Arc;

use crate::config::GatewayConfig;
use crate::errors::ApiError;
use crate::gateway::cache::QueryCache;
use crate::gateway::http::HttpGateway;
use crate::gateway::token::TokenStore;
use crate::resources::{alerts, chatbot, dashboard, forecasting, inventory, orders, suppliers, waste};
use crate::types::*;

/// Facade over the gateway and the query cache.
///
/// Reads go through the cache (staleness window from the config) and
/// are safe to degrade to placeholders in the UI; mutations always hit
/// the network, always propagate errors, and invalidate the read keys
/// they affect on success.
pub struct PharmClient {
    gateway: Arc<HttpGateway>,
    cache: QueryCache,
}

/// Cache operation names. Shared with the dashboard so polling and
/// invalidation agree on keys.
pub mod ops {
    pub const MEDICINES: &str = "medicines";
    pub const STOCK_LEVELS: &str = "stock-levels";
    pub const CATEGORIES: &str = "categories";
    pub const DASHBOARD_STATS: &str = "dashboard-stats";
    pub const EXPIRY_TIMELINE: &str = "expiry-timeline";
    pub const INVENTORY_BY_CATEGORY: &str = "inventory-by-category";
    pub const SALES_TRENDS: &str = "sales-trends";
    pub const TOP_MEDICINES: &str = "top-medicines";
    pub const ALERTS: &str = "alerts";
    pub const ALERTS_UNACKNOWLEDGED: &str = "alerts-unacknowledged";
    pub const ALERT_STATS: &str = "alert-stats";
    pub const REORDER_SUGGESTIONS: &str = "reorder-suggestions";
    pub const SUPPLIERS: &str = "suppliers";
    pub const PURCHASE_ORDERS: &str = "purchase-orders";
    pub const ORDERS: &str = "orders";
    pub const WASTE_ANALYTICS: &str = "waste-analytics";
    pub const WASTE_TOP_ITEMS: &str = "waste-top-items";
    pub const WASTE_BY_CATEGORY: &str = "waste-by-category";
}

impl PharmClient {
    pub fn new(config: GatewayConfig, tokens: Arc<dyn TokenStore>) -> Self {
        let cache = QueryCache::new(config.cache_staleness);
        let gateway = Arc::new(HttpGateway::new(config, tokens));
        Self { gateway, cache }
    }

    /// The shared gateway, for constructing an [`crate::AuthSession`]
    /// or calling resource functions directly.
    pub fn gateway(&self) -> Arc<HttpGateway> {
        self.gateway.clone()
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    // -- Inventory ----------------------------------------------------------

    pub async fn medicines(&self, filter: &MedicineFilter) -> Result<Vec<Medicine>, ApiError> {
        let params = serde_json::to_string(filter).unwrap_or_default();
        if let Some(hit) = self.cache.get(ops::MEDICINES, &params) {
            return Ok(hit);
        }
        let fresh = inventory::medicines(&self.gateway, filter).await?;
        self.cache.put(ops::MEDICINES, &params, &fresh);
        Ok(fresh)
    }

    pub async fn medicine(&self, id: i64) -> Result<Medicine, ApiError> {
        inventory::medicine(&self.gateway, id).await
    }

    pub async fn batches(&self, medicine_id: i64) -> Result<Vec<Batch>, ApiError> {
        inventory::batches(&self.gateway, medicine_id).await
    }

    pub async fn stock_levels(&self, low_stock_only: bool) -> Result<Vec<StockLevel>, ApiError> {
        let params = low_stock_only.to_string();
        if let Some(hit) = self.cache.get(ops::STOCK_LEVELS, &params) {
            return Ok(hit);
        }
        let fresh = inventory::stock_levels(&self.gateway, low_stock_only).await?;
        self.cache.put(ops::STOCK_LEVELS, &params, &fresh);
        Ok(fresh)
    }

    pub async fn categories(&self) -> Result<Vec<String>, ApiError> {
        if let Some(hit) = self.cache.get(ops::CATEGORIES, "") {
            return Ok(hit);
        }
        let fresh = inventory::categories(&self.gateway).await?;
        self.cache.put(ops::CATEGORIES, "", &fresh);
        Ok(fresh)
    }

    pub async fn price_comparison(&self) -> Result<Vec<PriceComparison>, ApiError> {
        inventory::price_comparison(&self.gateway).await
    }

    pub async fn analysis_report(&self) -> Result<AnalysisReport, ApiError> {
        inventory::analysis_report(&self.gateway).await
    }

    /// Bulk import; on success the medicine list, the stock levels and
    /// the dashboard aggregates are all out of date, so each of those
    /// keys is invalidated once.
    pub async fn upload_inventory(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<UploadReport, ApiError> {
        let report = inventory::upload(&self.gateway, file_name, contents).await?;
        self.cache.invalidate(&[
            ops::MEDICINES,
            ops::STOCK_LEVELS,
            ops::DASHBOARD_STATS,
        ]);
        Ok(report)
    }

    pub async fn delete_medicine(&self, id: i64) -> Result<ActionOutcome, ApiError> {
        let outcome = inventory::delete_medicine(&self.gateway, id).await?;
        self.cache.invalidate(&[
            ops::MEDICINES,
            ops::STOCK_LEVELS,
            ops::DASHBOARD_STATS,
        ]);
        Ok(outcome)
    }

    // -- Alerts -------------------------------------------------------------

    pub async fn alerts(&self, filter: &AlertFilter) -> Result<Vec<Alert>, ApiError> {
        let params = serde_json::to_string(filter).unwrap_or_default();
        if let Some(hit) = self.cache.get(ops::ALERTS, &params) {
            return Ok(hit);
        }
        let fresh = alerts::list(&self.gateway, filter).await?;
        self.cache.put(ops::ALERTS, &params, &fresh);
        Ok(fresh)
    }

    pub async fn unacknowledged_alerts(&self) -> Result<Vec<Alert>, ApiError> {
        if let Some(hit) = self.cache.get(ops::ALERTS_UNACKNOWLEDGED, "") {
            return Ok(hit);
        }
        let fresh = alerts::unacknowledged(&self.gateway).await?;
        self.cache.put(ops::ALERTS_UNACKNOWLEDGED, "", &fresh);
        Ok(fresh)
    }

    pub async fn alert_stats(&self) -> Result<AlertStats, ApiError> {
        if let Some(hit) = self.cache.get(ops::ALERT_STATS, "") {
            return Ok(hit);
        }
        let fresh = alerts::stats(&self.gateway).await?;
        self.cache.put(ops::ALERT_STATS, "", &fresh);
        Ok(fresh)
    }

    pub async fn acknowledge_alert(&self, alert_id: i64) -> Result<ActionOutcome, ApiError> {
        let outcome = alerts::acknowledge(&self.gateway, alert_id).await?;
        self.cache.invalidate(&[
            ops::ALERTS,
            ops::ALERTS_UNACKNOWLEDGED,
            ops::ALERT_STATS,
        ]);
        Ok(outcome)
    }

    pub async fn run_system_scan(&self) -> Result<ActionOutcome, ApiError> {
        let outcome = alerts::run_system_scan(&self.gateway).await?;
        self.cache.invalidate(&[
            ops::ALERTS,
            ops::ALERTS_UNACKNOWLEDGED,
            ops::ALERT_STATS,
        ]);
        Ok(outcome)
    }

    // -- Forecasting --------------------------------------------------------

    pub async fn forecast(&self, medicine_id: i64, horizon_days: u32) -> Result<Forecast, ApiError> {
        forecasting::forecast(&self.gateway, medicine_id, horizon_days).await
    }

    pub async fn reorder_suggestions(
        &self,
        category: Option<&str>,
        critical_only: bool,
    ) -> Result<Vec<ReorderSuggestion>, ApiError> {
        let params = format!("{}:{}", category.unwrap_or(""), critical_only);
        if let Some(hit) = self.cache.get(ops::REORDER_SUGGESTIONS, &params) {
            return Ok(hit);
        }
        let fresh = forecasting::reorder_suggestions(&self.gateway, category, critical_only).await?;
        self.cache.put(ops::REORDER_SUGGESTIONS, &params, &fresh);
        Ok(fresh)
    }

    pub async fn batch_forecast(&self) -> Result<ActionOutcome, ApiError> {
        let outcome = forecasting::batch_forecast(&self.gateway).await?;
        self.cache.invalidate(&[ops::REORDER_SUGGESTIONS]);
        Ok(outcome)
    }

    // -- Suppliers & purchase orders ----------------------------------------

    pub async fn suppliers(&self, active_only: bool) -> Result<Vec<Supplier>, ApiError> {
        let params = active_only.to_string();
        if let Some(hit) = self.cache.get(ops::SUPPLIERS, &params) {
            return Ok(hit);
        }
        let fresh = suppliers::list(&self.gateway, active_only).await?;
        self.cache.put(ops::SUPPLIERS, &params, &fresh);
        Ok(fresh)
    }

    pub async fn supplier(&self, id: i64) -> Result<Supplier, ApiError> {
        suppliers::get(&self.gateway, id).await
    }

    pub async fn create_supplier(&self, payload: &SupplierPayload) -> Result<Supplier, ApiError> {
        let supplier = suppliers::create(&self.gateway, payload).await?;
        self.cache.invalidate(&[ops::SUPPLIERS]);
        Ok(supplier)
    }

    pub async fn update_supplier(
        &self,
        id: i64,
        payload: &SupplierPayload,
    ) -> Result<Supplier, ApiError> {
        let supplier = suppliers::update(&self.gateway, id, payload).await?;
        self.cache.invalidate(&[ops::SUPPLIERS]);
        Ok(supplier)
    }

    pub async fn delete_supplier(&self, id: i64) -> Result<ActionOutcome, ApiError> {
        let outcome = suppliers::delete(&self.gateway, id).await?;
        self.cache.invalidate(&[ops::SUPPLIERS]);
        Ok(outcome)
    }

    pub async fn create_purchase_order(
        &self,
        order: &NewPurchaseOrder,
    ) -> Result<PurchaseOrder, ApiError> {
        let created = suppliers::create_purchase_order(&self.gateway, order).await?;
        self.cache.invalidate(&[ops::PURCHASE_ORDERS]);
        Ok(created)
    }

    pub async fn purchase_orders(
        &self,
        supplier_id: Option<i64>,
        status: Option<&str>,
    ) -> Result<Vec<PurchaseOrder>, ApiError> {
        let params = format!("{:?}:{:?}", supplier_id, status);
        if let Some(hit) = self.cache.get(ops::PURCHASE_ORDERS, &params) {
            return Ok(hit);
        }
        let fresh = suppliers::purchase_orders(&self.gateway, supplier_id, status).await?;
        self.cache.put(ops::PURCHASE_ORDERS, &params, &fresh);
        Ok(fresh)
    }

    // -- Prescription orders ------------------------------------------------

    pub async fn create_order(&self, order: &NewOrder) -> Result<PrescriptionOrder, ApiError> {
        let created = orders::create(&self.gateway, order).await?;
        self.cache.invalidate(&[ops::ORDERS]);
        Ok(created)
    }

    pub async fn upload_prescription(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<PrescriptionUpload, ApiError> {
        orders::upload_prescription(&self.gateway, file_name, contents).await
    }

    pub async fn orders(&self) -> Result<Vec<PrescriptionOrder>, ApiError> {
        if let Some(hit) = self.cache.get(ops::ORDERS, "") {
            return Ok(hit);
        }
        let fresh = orders::list(&self.gateway).await?;
        self.cache.put(ops::ORDERS, "", &fresh);
        Ok(fresh)
    }

    // -- Dashboard ----------------------------------------------------------

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        if let Some(hit) = self.cache.get(ops::DASHBOARD_STATS, "") {
            return Ok(hit);
        }
        let fresh = dashboard::stats(&self.gateway).await?;
        self.cache.put(ops::DASHBOARD_STATS, "", &fresh);
        Ok(fresh)
    }

    pub async fn expiry_timeline(&self) -> Result<Vec<ExpiryBucket>, ApiError> {
        if let Some(hit) = self.cache.get(ops::EXPIRY_TIMELINE, "") {
            return Ok(hit);
        }
        let fresh = dashboard::expiry_timeline(&self.gateway).await?;
        self.cache.put(ops::EXPIRY_TIMELINE, "", &fresh);
        Ok(fresh)
    }

    pub async fn inventory_by_category(&self) -> Result<Vec<CategoryStock>, ApiError> {
        if let Some(hit) = self.cache.get(ops::INVENTORY_BY_CATEGORY, "") {
            return Ok(hit);
        }
        let fresh = dashboard::inventory_by_category(&self.gateway).await?;
        self.cache.put(ops::INVENTORY_BY_CATEGORY, "", &fresh);
        Ok(fresh)
    }

    pub async fn sales_trends(&self, days: u32) -> Result<Vec<SalesPoint>, ApiError> {
        let params = days.to_string();
        if let Some(hit) = self.cache.get(ops::SALES_TRENDS, &params) {
            return Ok(hit);
        }
        let fresh = dashboard::sales_trends(&self.gateway, days).await?;
        self.cache.put(ops::SALES_TRENDS, &params, &fresh);
        Ok(fresh)
    }

    pub async fn top_medicines(&self, limit: u32, by: &str) -> Result<Vec<TopMedicine>, ApiError> {
        let params = format!("{}:{}", limit, by);
        if let Some(hit) = self.cache.get(ops::TOP_MEDICINES, &params) {
            return Ok(hit);
        }
        let fresh = dashboard::top_medicines(&self.gateway, limit, by).await?;
        self.cache.put(ops::TOP_MEDICINES, &params, &fresh);
        Ok(fresh)
    }

    // -- Waste --------------------------------------------------------------

    pub async fn waste_analytics(&self, category: Option<&str>) -> Result<WasteAnalytics, ApiError> {
        let params = category.unwrap_or("").to_string();
        if let Some(hit) = self.cache.get(ops::WASTE_ANALYTICS, &params) {
            return Ok(hit);
        }
        let fresh = waste::analytics(&self.gateway, category).await?;
        self.cache.put(ops::WASTE_ANALYTICS, &params, &fresh);
        Ok(fresh)
    }

    pub async fn top_waste_items(&self, limit: u32) -> Result<Vec<WasteItem>, ApiError> {
        let params = limit.to_string();
        if let Some(hit) = self.cache.get(ops::WASTE_TOP_ITEMS, &params) {
            return Ok(hit);
        }
        let fresh = waste::top_waste_items(&self.gateway, limit).await?;
        self.cache.put(ops::WASTE_TOP_ITEMS, &params, &fresh);
        Ok(fresh)
    }

    pub async fn waste_by_category(&self) -> Result<Vec<CategoryWaste>, ApiError> {
        if let Some(hit) = self.cache.get(ops::WASTE_BY_CATEGORY, "") {
            return Ok(hit);
        }
        let fresh = waste::by_category(&self.gateway).await?;
        self.cache.put(ops::WASTE_BY_CATEGORY, "", &fresh);
        Ok(fresh)
    }

    pub async fn mark_batch_expired(&self, batch_id: i64) -> Result<ActionOutcome, ApiError> {
        let outcome = waste::mark_expired(&self.gateway, batch_id).await?;
        self.cache.invalidate(&[
            ops::WASTE_ANALYTICS,
            ops::STOCK_LEVELS,
            ops::DASHBOARD_STATS,
        ]);
        Ok(outcome)
    }

    pub async fn mark_batch_damaged(&self, batch_id: i64) -> Result<ActionOutcome, ApiError> {
        let outcome = waste::mark_damaged(&self.gateway, batch_id).await?;
        self.cache.invalidate(&[
            ops::WASTE_ANALYTICS,
            ops::STOCK_LEVELS,
            ops::DASHBOARD_STATS,
        ]);
        Ok(outcome)
    }

    // -- Chatbot ------------------------------------------------------------

    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        chatbot::chat(&self.gateway, request).await
    }

    pub async fn chat_suggestions(&self) -> Result<ChatSuggestions, ApiError> {
        chatbot::suggestions(&self.gateway).await
    }
}
