use crate::registry::{FacetOption, FacetTable};

pub(super) const CAR_MAKES: &str = "carMakes";
pub(super) const CAR_MODELS: &str = "carModels";
pub(super) const MOTORCYCLE_TYPES: &str = "motorcycleTypes";
pub(super) const HEAVY_EQUIPMENT_TYPES: &str = "heavyEquipmentTypes";

/// Car makes. Well-known model names are listed as make aliases so a title
/// that only names the model still identifies the make.
///
/// Hyundai precedes Honda: the common misspelling "هونداي" contains "هوندا".
pub(super) fn car_makes() -> FacetTable {
    FacetTable::new(
        CAR_MAKES,
        vec![
            FacetOption::new(
                "toyota",
                "تويوتا",
                &[
                    "تويوتا", "تيوتا", "تايوتا", "هايلوكس", "hilux", "لاندكروزر", "land cruiser",
                    "برادو", "prado", "كامري", "camry", "كورولا", "corolla", "باص هايس", "hiace",
                ],
            ),
            FacetOption::new(
                "nissan",
                "نيسان",
                &["نيسان", "نيسن", "باترول", "patrol", "صني", "sunny", "datsun", "ددسن"],
            ),
            FacetOption::new(
                "hyundai",
                "هيونداي",
                &[
                    "هيونداي", "هيوندا", "هونداي", "النترا", "elantra", "سوناتا", "sonata", "اكسنت",
                    "accent",
                ],
            ),
            FacetOption::new(
                "kia",
                "كيا",
                &["كيا", "سبورتاج", "sportage", "سيراتو", "cerato", "بيكانتو", "picanto"],
            ),
            FacetOption::new(
                "honda",
                "هوندا",
                &["هوندا", "اكورد", "accord", "سيفيك", "civic"],
            ),
            FacetOption::new(
                "mitsubishi",
                "ميتسوبيشي",
                &["ميتسوبيشي", "متسوبيشي", "باجيرو", "pajero", "لانسر", "lancer"],
            ),
            FacetOption::new("mazda", "مازدا", &["مازدا"]),
            FacetOption::new("ford", "فورد", &["فورد"]),
            FacetOption::new(
                "chevrolet",
                "شفروليه",
                &["شفروليه", "شيفروليه", "شفرليت", "chevy"],
            ),
            FacetOption::new("gmc", "جي ام سي", &["جي ام سي", "جمس", "يوكن", "yukon"]),
            FacetOption::new(
                "mercedes",
                "مرسيدس",
                &["مرسيدس", "مارسيدس", "benz", "mercedes-benz"],
            ),
            FacetOption::new("bmw", "بي ام دبليو", &["بي ام دبليو", "بي إم"]),
            FacetOption::new("lexus", "لكزس", &["لكزس", "لكسز"]),
            FacetOption::new("suzuki", "سوزوكي", &["سوزوكي"]),
            FacetOption::new("isuzu", "ايسوزو", &["ايسوزو", "اسوزو"]),
            FacetOption::new(
                "land_rover",
                "لاند روفر",
                &["لاندروفر", "لاند روفر", "رنج روفر", "range rover", "land rover"],
            ),
            FacetOption::other(),
        ],
    )
}

/// Model tables, one per make that has them.
pub(super) fn car_models() -> Vec<FacetTable> {
    vec![
        FacetTable::new(
            format!("{CAR_MODELS}.toyota"),
            vec![
                FacetOption::new(
                    "land_cruiser",
                    "لاندكروزر",
                    &["لاندكروزر", "لاند كروزر", "شاص", "جيب شاص"],
                ),
                FacetOption::new("hilux", "هايلوكس", &["هايلوكس", "هيلوكس", "غمارتين"]),
                FacetOption::new("prado", "برادو", &["برادو"]),
                FacetOption::new("camry", "كامري", &["كامري"]),
                FacetOption::new("corolla", "كورولا", &["كورولا", "كرولا"]),
                FacetOption::new("yaris", "يارس", &["يارس", "ياريس"]),
                FacetOption::new("fortuner", "فورتشنر", &["فورتشنر"]),
                FacetOption::new("rav4", "راف فور", &["راف فور", "rav 4"]),
                FacetOption::new("hiace", "هايس", &["هايس", "باص هايس"]),
                FacetOption::other(),
            ],
        ),
        FacetTable::new(
            format!("{CAR_MODELS}.nissan"),
            vec![
                FacetOption::new("patrol", "باترول", &["باترول", "باطرول"]),
                FacetOption::new("sunny", "صني", &["صني"]),
                FacetOption::new("altima", "التيما", &["التيما"]),
                FacetOption::new("navara", "نافارا", &["نافارا"]),
                FacetOption::new("urvan", "اورفان", &["اورفان"]),
                FacetOption::other(),
            ],
        ),
        FacetTable::new(
            format!("{CAR_MODELS}.hyundai"),
            vec![
                FacetOption::new("elantra", "النترا", &["النترا"]),
                FacetOption::new("sonata", "سوناتا", &["سوناتا"]),
                FacetOption::new("accent", "اكسنت", &["اكسنت"]),
                FacetOption::new("tucson", "توسان", &["توسان"]),
                FacetOption::new("santa_fe", "سنتافي", &["سنتافي", "سانتافي"]),
                FacetOption::other(),
            ],
        ),
        FacetTable::new(
            format!("{CAR_MODELS}.kia"),
            vec![
                FacetOption::new("sportage", "سبورتاج", &["سبورتاج"]),
                FacetOption::new("cerato", "سيراتو", &["سيراتو"]),
                FacetOption::new("sorento", "سورينتو", &["سورينتو"]),
                FacetOption::new("picanto", "بيكانتو", &["بيكانتو"]),
                FacetOption::other(),
            ],
        ),
        FacetTable::new(
            format!("{CAR_MODELS}.honda"),
            vec![
                FacetOption::new("accord", "اكورد", &["اكورد"]),
                FacetOption::new("civic", "سيفيك", &["سيفيك"]),
                FacetOption::new("crv", "سي ار في", &["سي ار في", "cr-v"]),
                FacetOption::other(),
            ],
        ),
        FacetTable::new(
            format!("{CAR_MODELS}.mitsubishi"),
            vec![
                FacetOption::new("pajero", "باجيرو", &["باجيرو"]),
                FacetOption::new("l200", "ال 200", &["ال 200", "l 200"]),
                FacetOption::new("lancer", "لانسر", &["لانسر"]),
                FacetOption::other(),
            ],
        ),
        FacetTable::new(
            format!("{CAR_MODELS}.mercedes"),
            vec![
                FacetOption::new("c_class", "سي كلاس", &["سي كلاس"]),
                FacetOption::new("e_class", "اي كلاس", &["اي كلاس"]),
                FacetOption::new("s_class", "اس كلاس", &["اس كلاس"]),
                FacetOption::new("g_class", "جي كلاس", &["جي كلاس"]),
                FacetOption::other(),
            ],
        ),
    ]
}

pub(super) fn motorcycle_types() -> FacetTable {
    FacetTable::new(
        MOTORCYCLE_TYPES,
        vec![
            FacetOption::new(
                "motorcycle",
                "دراجة نارية",
                &["دراجة نارية", "دباب", "موتور", "متور", "motorbike"],
            ),
            FacetOption::new("scooter", "سكوتر", &["سكوتر"]),
            FacetOption::new("atv", "دباب رباعي", &["رباعي", "quad"]),
            FacetOption::new(
                "bicycle",
                "دراجة هوائية",
                &["دراجة هوائية", "سيكل", "بسكليت", "bike"],
            ),
            FacetOption::other(),
        ],
    )
}

/// Forklift precedes crane: "رافعة شوكية" contains "رافعة".
pub(super) fn heavy_equipment_types() -> FacetTable {
    FacetTable::new(
        HEAVY_EQUIPMENT_TYPES,
        vec![
            FacetOption::new(
                "excavator",
                "حفار",
                &["حفار", "حفارة", "بوكلين", "digger"],
            ),
            FacetOption::new("loader", "شيول", &["شيول", "شيولات"]),
            FacetOption::new("forklift", "رافعة شوكية", &["رافعة شوكية", "فوركلفت"]),
            FacetOption::new("crane", "كرين", &["كرين", "رافعة", "ونش"]),
            FacetOption::new("truck", "شاحنة", &["شاحنة", "شاحنات", "قلاب", "دينا"]),
            FacetOption::new("generator", "مولد", &["مولد", "مولدات", "ماطور"]),
            FacetOption::new("bulldozer", "بلدوزر", &["بلدوزر", "جرافة", "dozer"]),
            FacetOption::other(),
        ],
    )
}
