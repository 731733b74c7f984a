use crate::registry::{FacetOption, FacetTable, ROOT_TABLE};

pub(super) const PHONE_BRANDS: &str = "phoneBrands";
pub(super) const ELECTRONICS_TYPES: &str = "electronicsTypes";
pub(super) const SOLAR_TYPES: &str = "solarTypes";
pub(super) const FURNITURE_TYPES: &str = "furnitureTypes";
pub(super) const HOME_APPLIANCE_TYPES: &str = "homeApplianceTypes";
pub(super) const CLOTHES_TYPES: &str = "clothesTypes";
pub(super) const ANIMAL_TYPES: &str = "animalTypes";
pub(super) const JOB_TYPES: &str = "jobTypes";
pub(super) const SERVICE_TYPES: &str = "serviceTypes";
pub(super) const NETWORKING_TYPES: &str = "networkingTypes";
pub(super) const MAINTENANCE_TYPES: &str = "maintenanceTypes";

pub(super) fn roots() -> FacetTable {
    FacetTable::new(
        ROOT_TABLE,
        vec![
            FacetOption::new("cars", "سيارات", &["سيارات", "سيارة", "vehicles", "autos"]),
            FacetOption::new(
                "realestate",
                "عقارات",
                &["عقارات", "عقار", "real estate", "property", "properties"],
            ),
            FacetOption::new(
                "phones",
                "جوالات",
                &["جوالات", "جوال", "هواتف", "تلفونات", "موبايل", "mobile", "mobiles"],
            ),
            FacetOption::new(
                "electronics",
                "إلكترونيات",
                &["إلكترونيات", "اجهزة الكترونية"],
            ),
            FacetOption::new(
                "motorcycles",
                "دراجات",
                &["دراجات", "دراجات نارية", "موترات", "bikes"],
            ),
            FacetOption::new(
                "heavy_equipment",
                "معدات ثقيلة",
                &["معدات ثقيلة", "معدات", "heavy equipment"],
            ),
            FacetOption::new("solar", "طاقة شمسية", &["طاقة شمسية", "منظومات شمسية"]),
            FacetOption::new(
                "home_appliances",
                "أجهزة منزلية",
                &["أجهزة منزلية", "أدوات منزلية", "home appliances"],
            ),
            FacetOption::new("furniture", "أثاث", &["أثاث", "مفروشات"]),
            FacetOption::new("networking", "شبكات", &["شبكات", "انترنت", "network"]),
            FacetOption::new("maintenance", "صيانة", &["صيانة", "repairs"]),
            FacetOption::new("jobs", "وظائف", &["وظائف", "وظيفة"]),
            FacetOption::new("services", "خدمات", &["خدمات"]),
            FacetOption::new("clothes", "ملابس", &["ملابس", "أزياء", "fashion"]),
            FacetOption::new("animals", "حيوانات", &["حيوانات", "مواشي", "livestock"]),
            FacetOption::other(),
        ],
    )
}

pub(super) fn phone_brands() -> FacetTable {
    FacetTable::new(
        PHONE_BRANDS,
        vec![
            FacetOption::new("apple", "آيفون", &["iphone", "ايفون", "آيفون", "أبل"]),
            FacetOption::new(
                "samsung",
                "سامسونج",
                &["سامسونج", "سامسونغ", "سامسنج", "galaxy", "جالكسي", "جلكسي"],
            ),
            FacetOption::new("huawei", "هواوي", &["هواوي", "هواوى"]),
            FacetOption::new("xiaomi", "شاومي", &["شاومي", "redmi", "ريدمي", "poco"]),
            FacetOption::new("oppo", "اوبو", &["اوبو"]),
            FacetOption::new("vivo", "فيفو", &["فيفو"]),
            FacetOption::new("realme", "ريلمي", &["ريلمي"]),
            FacetOption::new("infinix", "انفينكس", &["انفينكس", "انفنكس"]),
            FacetOption::new("tecno", "تكنو", &["تكنو"]),
            FacetOption::new("nokia", "نوكيا", &["نوكيا"]),
            FacetOption::new("honor", "هونر", &["هونر", "هونور"]),
            FacetOption::new("google", "جوجل", &["جوجل", "pixel", "بكسل"]),
            FacetOption::new("oneplus", "ون بلس", &["ون بلس", "one plus"]),
            FacetOption::other(),
        ],
    )
}

pub(super) fn electronics_types() -> FacetTable {
    FacetTable::new(
        ELECTRONICS_TYPES,
        vec![
            FacetOption::new("tv", "شاشات", &["تلفزيون", "شاشة", "شاشات", "television"]),
            FacetOption::new("laptop", "لابتوب", &["لابتوب", "لاب توب", "notebook"]),
            FacetOption::new("computer", "كمبيوتر", &["كمبيوتر", "كمبيوترات", "desktop", "pc"]),
            FacetOption::new("tablet", "تابلت", &["تابلت", "ايباد", "ipad"]),
            FacetOption::new("camera", "كاميرا", &["كاميرا", "كاميرات"]),
            FacetOption::new(
                "gaming",
                "ألعاب الفيديو",
                &["بلايستيشن", "بلاي ستيشن", "playstation", "xbox", "اكس بوكس"],
            ),
            FacetOption::new("audio", "صوتيات", &["سماعة", "سماعات", "speaker", "headphones"]),
            FacetOption::other(),
        ],
    )
}

pub(super) fn solar_types() -> FacetTable {
    FacetTable::new(
        SOLAR_TYPES,
        vec![
            FacetOption::new(
                "panel",
                "ألواح شمسية",
                &["لوح شمسي", "ألواح شمسية", "الواح", "panels", "solar panel"],
            ),
            FacetOption::new("battery", "بطاريات", &["بطارية", "بطاريات", "بترية", "batteries"]),
            FacetOption::new("inverter", "انفرتر", &["انفرتر", "محول كهربائي"]),
            FacetOption::new(
                "charger",
                "منظم شحن",
                &["منظم شحن", "منظم", "charge controller"],
            ),
            FacetOption::other(),
        ],
    )
}

/// Desk precedes table: "طاولة مكتب" contains "طاولة".
pub(super) fn furniture_types() -> FacetTable {
    FacetTable::new(
        FURNITURE_TYPES,
        vec![
            FacetOption::new("sofa", "كنب", &["كنب", "كنبة", "صالون", "مجلس", "couch"]),
            FacetOption::new("bed", "سرير", &["سرير", "غرفة نوم", "bedroom"]),
            FacetOption::new("desk", "طاولة مكتب", &["طاولة مكتب", "office desk"]),
            FacetOption::new("table", "طاولة", &["طاولة", "طاولات", "سفرة"]),
            FacetOption::new("wardrobe", "دولاب", &["دولاب", "دواليب", "خزانة", "closet"]),
            FacetOption::new("chair", "كرسي", &["كرسي", "كراسي"]),
            FacetOption::other(),
        ],
    )
}

pub(super) fn home_appliance_types() -> FacetTable {
    FacetTable::new(
        HOME_APPLIANCE_TYPES,
        vec![
            FacetOption::new(
                "fridge",
                "ثلاجة",
                &["ثلاجة", "ثلاجات", "فريزر", "refrigerator", "freezer"],
            ),
            FacetOption::new(
                "washer",
                "غسالة",
                &["غسالة", "غسالات", "washing machine"],
            ),
            FacetOption::new(
                "air_conditioner",
                "مكيف",
                &["مكيف", "مكيفات", "سبليت", "air conditioner"],
            ),
            FacetOption::new("oven", "فرن", &["فرن", "بوتاجاز", "طباخة", "stove", "cooker"]),
            FacetOption::new("microwave", "مايكرويف", &["مايكرويف", "ميكرويف"]),
            FacetOption::new("heater", "سخان", &["سخان", "سخانات", "water heater"]),
            FacetOption::new("fan", "مروحة", &["مروحة", "مراوح"]),
            FacetOption::other(),
        ],
    )
}

/// Women precedes men: "women" contains "men".
pub(super) fn clothes_types() -> FacetTable {
    FacetTable::new(
        CLOTHES_TYPES,
        vec![
            FacetOption::new(
                "women",
                "نسائي",
                &["نسائي", "ملابس نسائية", "عباية", "عبايات", "womens"],
            ),
            FacetOption::new("men", "رجالي", &["رجالي", "ملابس رجالية", "mens"]),
            FacetOption::new("kids", "أطفال", &["اطفال", "ملابس اطفال", "children"]),
            FacetOption::new("shoes", "أحذية", &["أحذية", "حذاء", "جزمة"]),
            FacetOption::new(
                "accessories",
                "إكسسوارات",
                &["اكسسوارات", "إكسسوار", "ساعات يد"],
            ),
            FacetOption::other(),
        ],
    )
}

pub(super) fn animal_types() -> FacetTable {
    FacetTable::new(
        ANIMAL_TYPES,
        vec![
            FacetOption::new("sheep", "غنم", &["غنم", "اغنام", "خروف", "خرفان"]),
            FacetOption::new("goat", "ماعز", &["ماعز", "تيس", "goats"]),
            FacetOption::new("cattle", "أبقار", &["بقر", "أبقار", "ثور", "عجل", "cow"]),
            FacetOption::new("camel", "جمال", &["جمال", "ناقة", "نوق", "camels"]),
            FacetOption::new("birds", "طيور", &["طيور", "حمام", "دجاج", "عصافير", "chicken"]),
            FacetOption::new("horses", "خيول", &["خيل", "خيول", "حصان", "horse"]),
            FacetOption::new("pets", "حيوانات أليفة", &["قطط", "كلاب", "كلب", "cats", "dogs"]),
            FacetOption::other(),
        ],
    )
}

pub(super) fn job_types() -> FacetTable {
    FacetTable::new(
        JOB_TYPES,
        vec![
            FacetOption::new("driver", "سائق", &["سائق", "سواق"]),
            FacetOption::new("teacher", "مدرس", &["مدرس", "معلم", "مدرسين"]),
            FacetOption::new("engineer", "مهندس", &["مهندس", "مهندسة"]),
            FacetOption::new("accountant", "محاسب", &["محاسب", "محاسبة"]),
            FacetOption::new("sales", "مبيعات", &["مبيعات", "مندوب مبيعات", "salesman"]),
            FacetOption::new("technician", "فني", &["فني", "فنيين"]),
            FacetOption::new("worker", "عامل", &["عامل", "عمال", "labor"]),
            FacetOption::other(),
        ],
    )
}

pub(super) fn service_types() -> FacetTable {
    FacetTable::new(
        SERVICE_TYPES,
        vec![
            FacetOption::new("transport", "نقل", &["نقل", "نقل عفش", "شحن", "moving"]),
            FacetOption::new("cleaning", "تنظيف", &["تنظيف", "نظافة"]),
            FacetOption::new("construction", "مقاولات", &["مقاولات", "مقاول", "بناء"]),
            FacetOption::new("design", "تصميم", &["تصميم", "برمجة", "graphic design"]),
            FacetOption::new("education", "تدريس", &["تدريس", "دروس خصوصية", "tutoring"]),
            FacetOption::new("events", "مناسبات", &["مناسبات", "حفلات", "تصوير"]),
            FacetOption::other(),
        ],
    )
}

pub(super) fn networking_types() -> FacetTable {
    FacetTable::new(
        NETWORKING_TYPES,
        vec![
            FacetOption::new("router", "راوتر", &["راوتر", "رواتر", "modem", "مودم"]),
            FacetOption::new(
                "access_point",
                "اكسس بوينت",
                &["اكسس بوينت", "access point", "نانو", "ubiquiti"],
            ),
            FacetOption::new("switch", "سويتش", &["سويتش"]),
            FacetOption::new("cable", "كابلات", &["كابل", "كيبل", "كابلات"]),
            FacetOption::new("tower", "أبراج", &["برج", "ابراج", "mast"]),
            FacetOption::other(),
        ],
    )
}

pub(super) fn maintenance_types() -> FacetTable {
    FacetTable::new(
        MAINTENANCE_TYPES,
        vec![
            FacetOption::new(
                "phone_repair",
                "صيانة جوالات",
                &["صيانة جوالات", "صيانة تلفونات", "phone repair"],
            ),
            FacetOption::new(
                "car_repair",
                "صيانة سيارات",
                &["صيانة سيارات", "ميكانيك", "ميكانيكي", "mechanic"],
            ),
            FacetOption::new("electrical", "كهرباء", &["كهرباء", "كهربائي", "electrician"]),
            FacetOption::new("plumbing", "سباكة", &["سباكة", "سباك", "plumber"]),
            FacetOption::new("ac_repair", "صيانة مكيفات", &["صيانة مكيفات", "ac repair"]),
            FacetOption::new(
                "appliance_repair",
                "صيانة أجهزة",
                &["صيانة اجهزة", "صيانة غسالات", "appliance repair"],
            ),
            FacetOption::other(),
        ],
    )
}
