//! The taxonomy that ships with the crate.
//!
//! Tables are kept in plain Rust so that the registry is available without
//! any I/O. Within a table, option order matters for free-text detection:
//! when one option's spelling contains another's, the longer one is listed
//! first.

mod categories;
mod property;
mod vehicles;

use categories::{
    ANIMAL_TYPES, CLOTHES_TYPES, ELECTRONICS_TYPES, FURNITURE_TYPES, HOME_APPLIANCE_TYPES,
    JOB_TYPES, MAINTENANCE_TYPES, NETWORKING_TYPES, PHONE_BRANDS, SERVICE_TYPES, SOLAR_TYPES,
};
use property::{DEAL_TYPES, PROPERTY_TYPES};
use vehicles::{CAR_MAKES, CAR_MODELS, HEAVY_EQUIPMENT_TYPES, MOTORCYCLE_TYPES};

use crate::registry::{
    CategorySchema, FacetSchema, Fallback, FieldPath, RegistryError, TableRef, TaxonomyField,
    TaxonomyRegistry, category_type_fields,
};

/// Root keys with a second facet level.
pub const CARS: &str = "cars";
pub const REAL_ESTATE: &str = "realestate";
pub const PHONES: &str = "phones";

static CAR_MAKE_FIELDS: [FieldPath; 8] = [
    FieldPath::Top("carMake"),
    FieldPath::Top("make"),
    FieldPath::Top("brand"),
    FieldPath::Top("company"),
    FieldPath::Top("manufacturer"),
    FieldPath::Top("carBrand"),
    FieldPath::Top("vehicleMake"),
    FieldPath::Nested("car", "make"),
];

static CAR_MODEL_FIELDS: [FieldPath; 5] = [
    FieldPath::Top("carModel"),
    FieldPath::Top("model"),
    FieldPath::Top("modelName"),
    FieldPath::Top("vehicleModel"),
    FieldPath::Nested("car", "model"),
];

static PHONE_BRAND_FIELDS: [FieldPath; 6] = [
    FieldPath::Top("phoneBrand"),
    FieldPath::Top("brand"),
    FieldPath::Top("make"),
    FieldPath::Top("manufacturer"),
    FieldPath::Top("company"),
    FieldPath::Top("deviceBrand"),
];

static DEAL_TYPE_FIELDS: [FieldPath; 6] = [
    FieldPath::Top("dealType"),
    FieldPath::Top("deal"),
    FieldPath::Top("offerType"),
    FieldPath::Top("listingType"),
    FieldPath::Top("purpose"),
    FieldPath::Top("transactionType"),
];

static PROPERTY_TYPE_FIELDS: [FieldPath; 5] = [
    FieldPath::Top("propertyType"),
    FieldPath::Top("realEstateType"),
    FieldPath::Top("estateType"),
    FieldPath::Top("unitType"),
    FieldPath::Top("type"),
];

static ELECTRONICS_FIELDS: [FieldPath; 6] = category_type_fields("electronicsType");
static MOTORCYCLE_FIELDS: [FieldPath; 6] = category_type_fields("motorcycleType");
static HEAVY_EQUIPMENT_FIELDS: [FieldPath; 6] = category_type_fields("heavyEquipmentType");
static SOLAR_FIELDS: [FieldPath; 6] = category_type_fields("solarType");
static HOME_APPLIANCE_FIELDS: [FieldPath; 6] = category_type_fields("homeApplianceType");
static FURNITURE_FIELDS: [FieldPath; 6] = category_type_fields("furnitureType");
static NETWORKING_FIELDS: [FieldPath; 6] = category_type_fields("networkingType");
static MAINTENANCE_FIELDS: [FieldPath; 6] = category_type_fields("maintenanceType");
static JOB_FIELDS: [FieldPath; 6] = category_type_fields("jobType");
static SERVICE_FIELDS: [FieldPath; 6] = category_type_fields("serviceType");
static CLOTHES_FIELDS: [FieldPath; 6] = category_type_fields("clothesType");
static ANIMAL_FIELDS: [FieldPath; 6] = category_type_fields("animalType");

const fn single_facet(
    root: &'static str,
    table: &'static str,
    sources: &'static [FieldPath],
) -> CategorySchema {
    CategorySchema {
        root,
        level1: FacetSchema {
            field: TaxonomyField::CategoryType,
            table: TableRef::Fixed(table),
            sources,
            fallback: Fallback::Other,
        },
        level2: None,
        signal_table: table,
    }
}

/// Category schemas in signal-scan order.
fn category_schemas() -> Vec<CategorySchema> {
    vec![
        CategorySchema {
            root: CARS,
            level1: FacetSchema {
                field: TaxonomyField::CarMake,
                table: TableRef::Fixed(CAR_MAKES),
                sources: &CAR_MAKE_FIELDS,
                fallback: Fallback::Other,
            },
            level2: Some(FacetSchema {
                field: TaxonomyField::CarModel,
                table: TableRef::PerParent(CAR_MODELS),
                sources: &CAR_MODEL_FIELDS,
                fallback: Fallback::Other,
            }),
            signal_table: CAR_MAKES,
        },
        // Deal type is never guessed: an unsupported "sale" or "rent" is
        // worse than an unclassified listing.
        CategorySchema {
            root: REAL_ESTATE,
            level1: FacetSchema {
                field: TaxonomyField::DealType,
                table: TableRef::Fixed(DEAL_TYPES),
                sources: &DEAL_TYPE_FIELDS,
                fallback: Fallback::Unclassified,
            },
            level2: Some(FacetSchema {
                field: TaxonomyField::PropertyType,
                table: TableRef::Fixed(PROPERTY_TYPES),
                sources: &PROPERTY_TYPE_FIELDS,
                fallback: Fallback::Other,
            }),
            signal_table: PROPERTY_TYPES,
        },
        CategorySchema {
            root: PHONES,
            level1: FacetSchema {
                field: TaxonomyField::PhoneBrand,
                table: TableRef::Fixed(PHONE_BRANDS),
                sources: &PHONE_BRAND_FIELDS,
                fallback: Fallback::Other,
            },
            level2: None,
            signal_table: PHONE_BRANDS,
        },
        single_facet("electronics", ELECTRONICS_TYPES, &ELECTRONICS_FIELDS),
        single_facet("motorcycles", MOTORCYCLE_TYPES, &MOTORCYCLE_FIELDS),
        single_facet("heavy_equipment", HEAVY_EQUIPMENT_TYPES, &HEAVY_EQUIPMENT_FIELDS),
        single_facet("solar", SOLAR_TYPES, &SOLAR_FIELDS),
        single_facet("home_appliances", HOME_APPLIANCE_TYPES, &HOME_APPLIANCE_FIELDS),
        single_facet("furniture", FURNITURE_TYPES, &FURNITURE_FIELDS),
        single_facet("networking", NETWORKING_TYPES, &NETWORKING_FIELDS),
        single_facet("maintenance", MAINTENANCE_TYPES, &MAINTENANCE_FIELDS),
        single_facet("jobs", JOB_TYPES, &JOB_FIELDS),
        single_facet("services", SERVICE_TYPES, &SERVICE_FIELDS),
        single_facet("clothes", CLOTHES_TYPES, &CLOTHES_FIELDS),
        single_facet("animals", ANIMAL_TYPES, &ANIMAL_FIELDS),
    ]
}

/// Build the builtin registry.
pub fn builtin_registry() -> Result<TaxonomyRegistry, RegistryError> {
    let mut tables = vec![
        vehicles::car_makes(),
        property::deal_types(),
        property::property_types(),
        categories::phone_brands(),
        categories::electronics_types(),
        vehicles::motorcycle_types(),
        vehicles::heavy_equipment_types(),
        categories::solar_types(),
        categories::home_appliance_types(),
        categories::furniture_types(),
        categories::networking_types(),
        categories::maintenance_types(),
        categories::job_types(),
        categories::service_types(),
        categories::clothes_types(),
        categories::animal_types(),
    ];
    tables.extend(vehicles::car_models());

    TaxonomyRegistry::new(categories::roots(), tables, category_schemas())
}
