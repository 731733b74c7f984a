use crate::registry::{FacetOption, FacetTable};

pub(super) const DEAL_TYPES: &str = "dealTypes";
pub(super) const PROPERTY_TYPES: &str = "propertyTypes";

pub(super) fn deal_types() -> FacetTable {
    FacetTable::new(
        DEAL_TYPES,
        vec![
            FacetOption::new("sale", "للبيع", &["بيع", "للبيع", "sell", "for sale", "selling"]),
            FacetOption::new(
                "rent",
                "للإيجار",
                &["ايجار", "للإيجار", "rental", "for rent", "lease"],
            ),
            FacetOption::other(),
        ],
    )
}

/// Warehouse precedes house: "warehouse" contains "house".
pub(super) fn property_types() -> FacetTable {
    FacetTable::new(
        PROPERTY_TYPES,
        vec![
            FacetOption::new("apartment", "شقة", &["شقة", "شقق", "flat"]),
            FacetOption::new("villa", "فيلا", &["فيلا", "فله", "فلل"]),
            FacetOption::new("warehouse", "مخزن", &["مخزن", "مستودع", "هنجر"]),
            FacetOption::new("house", "بيت", &["بيت", "منزل", "بيوت", "home"]),
            FacetOption::new("land", "أرض", &["أرض", "اراضي", "plot", "قطعة ارض"]),
            FacetOption::new("building", "عمارة", &["عمارة", "عمارات", "مبنى"]),
            FacetOption::new("shop", "محل", &["محل", "محلات", "دكان"]),
            FacetOption::new("office", "مكتب", &["مكتب", "مكاتب"]),
            FacetOption::new("farm", "مزرعة", &["مزرعة", "مزارع"]),
            FacetOption::other(),
        ],
    )
}
