/// Built-in city list, already normalized.
pub const CITIES: [&str; 15] = [
    "москва",
    "архангельск",
    "казань",
    "новосибирск",
    "владивосток",
    "ростов",
    "сочи",
    "самара",
    "питер",
    "екатеринбург",
    "уфа",
    "омск",
    "нижний новгород",
    "волгоград",
    "краснодар",
];
