// services/web-dash/src/mock.rs
//
// Placeholder datasets for best-effort read views.
//
// Shown only when a read query fails and the view opts into degraded
// rendering; every page that uses these MUST raise the placeholder
// banner so the numbers are never mistaken for live data.
//

use apikit::types::{
    Alert, CategoryStock, DashboardStats, ExpiryBucket, Medicine, ReorderSuggestion, SalesPoint,
    StockLevel, WasteAnalytics, WasteBucket, WasteTotal,
};
use chrono::{Duration, Utc};

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_stock_value: 45_210.50,
        total_skus: 128,
        low_stock_count: 7,
        expiring_soon_count: 4,
        total_alerts: 11,
        wastage_value: 890.0,
    }
}

pub fn medicines() -> Vec<Medicine> {
    vec![
        medicine(1, "MED001", "Paracetamol 500mg", "Pain Relief", 10.5, 8.0),
        medicine(2, "MED002", "Azithromycin 500mg", "Antibiotics", 25.0, 20.0),
        medicine(3, "MED003", "Metformin 500mg", "Diabetes", 5.75, 4.5),
        medicine(4, "MED004", "Cetirizine 10mg", "Allergy", 3.25, 2.4),
    ]
}

fn medicine(id: i64, sku: &str, name: &str, category: &str, mrp: f64, cost: f64) -> Medicine {
    Medicine {
        id,
        sku: sku.to_string(),
        name: name.to_string(),
        category: Some(category.to_string()),
        manufacturer: Some("ABC Pharma".to_string()),
        brand: None,
        mrp: Some(mrp),
        cost: Some(cost),
        schedule: None,
        storage_requirements: Some("Room Temperature".to_string()),
        is_active: true,
    }
}

pub fn stock_levels() -> Vec<StockLevel> {
    vec![
        stock(1, "MED001", "Paracetamol 500mg", "Pain Relief", 120, 90),
        stock(2, "MED002", "Azithromycin 500mg", "Antibiotics", 35, 45),
        stock(3, "MED003", "Metformin 500mg", "Diabetes", 12, 20),
    ]
}

fn stock(
    medicine_id: i64,
    sku: &str,
    name: &str,
    category: &str,
    quantity: i64,
    expiry_days: i64,
) -> StockLevel {
    StockLevel {
        medicine_id,
        sku: sku.to_string(),
        name: name.to_string(),
        category: Some(category.to_string()),
        total_quantity: quantity,
        nearest_expiry: Some(Utc::now() + Duration::days(expiry_days)),
    }
}

pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            alert_type: "low_stock".to_string(),
            medicine_id: Some(3),
            batch_id: None,
            message: "Low Stock: Metformin 500mg has only 12 units.".to_string(),
            severity: "high".to_string(),
            is_acknowledged: false,
            created_at: Utc::now() - Duration::hours(6),
        },
        Alert {
            id: 2,
            alert_type: "expiry_warning".to_string(),
            medicine_id: Some(2),
            batch_id: Some(17),
            message: "Batch B-204 for Azithromycin 500mg expires in 21 days".to_string(),
            severity: "critical".to_string(),
            is_acknowledged: false,
            created_at: Utc::now() - Duration::hours(30),
        },
    ]
}

pub fn reorder_suggestions() -> Vec<ReorderSuggestion> {
    vec![
        suggestion(3, "MED003", "Metformin 500mg", "Diabetes", 12, "low_stock", 95.0, 40.0, 120.0),
        suggestion(2, "MED002", "Azithromycin 500mg", "Antibiotics", 35, "at_risk", 60.0, 25.0, 80.0),
        suggestion(1, "MED001", "Paracetamol 500mg", "Pain Relief", 120, "healthy", 110.0, 50.0, 150.0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn suggestion(
    medicine_id: i64,
    sku: &str,
    name: &str,
    category: &str,
    current_stock: i64,
    priority: &str,
    demand: f64,
    reorder_point: f64,
    recommended: f64,
) -> ReorderSuggestion {
    ReorderSuggestion {
        medicine_id,
        medicine_name: name.to_string(),
        sku: sku.to_string(),
        category: Some(category.to_string()),
        current_stock,
        total_physical_stock: current_stock,
        expired_stock: 0,
        priority: priority.to_string(),
        forecasted_demand: demand,
        reorder_point,
        recommended_quantity: recommended,
        confidence_score: 0.72,
        reasoning: "Placeholder estimate from recent averages".to_string(),
    }
}

pub fn expiry_timeline() -> Vec<ExpiryBucket> {
    vec![
        bucket("0-30 days", 1_240.0, 86),
        bucket("31-60 days", 2_610.0, 140),
        bucket("61-90 days", 4_420.0, 310),
        bucket("91+ days", 36_940.0, 2_250),
    ]
}

fn bucket(label: &str, value: f64, quantity: i64) -> ExpiryBucket {
    ExpiryBucket {
        bucket: label.to_string(),
        value,
        quantity,
    }
}

pub fn inventory_by_category() -> Vec<CategoryStock> {
    vec![
        category("Pain Relief", 9_800.0, 820),
        category("Antibiotics", 14_200.0, 460),
        category("Diabetes", 7_400.0, 510),
        category("Allergy", 3_100.0, 390),
        category("Vitamins", 10_710.5, 600),
    ]
}

fn category(name: &str, value: f64, quantity: i64) -> CategoryStock {
    CategoryStock {
        category: name.to_string(),
        total_value: value,
        total_quantity: quantity,
    }
}

pub fn sales_trends() -> Vec<SalesPoint> {
    (0..30)
        .map(|day| {
            let date = Utc::now() - Duration::days(29 - day);
            SalesPoint {
                date: date.format("%Y-%m-%d").to_string(),
                quantity: 40 + ((day * 13) % 25),
                value: None,
            }
        })
        .collect()
}

pub fn waste_analytics() -> WasteAnalytics {
    WasteAnalytics {
        expired: WasteBucket {
            quantity: 64,
            value: 612.0,
        },
        damaged: WasteBucket {
            quantity: 18,
            value: 178.0,
        },
        recalled: WasteBucket {
            quantity: 5,
            value: 100.0,
        },
        returned: WasteBucket {
            quantity: 0,
            value: 0.0,
        },
        total: WasteTotal {
            quantity: 87,
            value: 890.0,
            wastage_rate_percent: 1.93,
        },
    }
}
