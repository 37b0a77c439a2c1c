use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ServiceTier {
    pub title: String,
    /// Whole dollars.
    pub price: u32,
    pub description: String,
    pub features: Vec<String>,
    /// Value submitted in the booking form's `package` field.
    pub package: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddOn {
    pub name: String,
    pub price: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ServiceArea {
    pub name: String,
    pub highlight: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PackageOption {
    pub value: String,
    pub label: String,
}

/// Everything the landing page renders besides the form.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContent {
    pub business_name: String,
    pub services: Vec<ServiceTier>,
    pub add_ons: Vec<AddOn>,
    pub gallery: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub service_areas: Vec<ServiceArea>,
}

pub fn format_price(dollars: u32) -> String {
    format!("${dollars}")
}

fn tier(title: &str, price: u32, description: &str, features: [&str; 4], package: &str) -> ServiceTier {
    ServiceTier {
        title: title.to_string(),
        price,
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        package: package.to_string(),
    }
}

fn add_on(name: &str, price: u32) -> AddOn {
    AddOn {
        name: name.to_string(),
        price,
    }
}

fn testimonial(name: &str, text: &str) -> Testimonial {
    Testimonial {
        name: name.to_string(),
        text: text.to_string(),
        rating: 5,
    }
}

fn area(name: &str, highlight: bool) -> ServiceArea {
    ServiceArea {
        name: name.to_string(),
        highlight,
    }
}

impl SiteContent {
    pub fn crystal_clear() -> Self {
        Self {
            business_name: "Crystal Clear Mobile Detailing".to_string(),
            services: vec![
                tier(
                    "Premium Detailing",
                    250,
                    "Full inside & out with showroom finish",
                    ["Interior deep clean", "Exterior wash & wax", "Paint sealant", "Tire shine"],
                    "Premium detail (full inside and out)",
                ),
                tier(
                    "Basic Detail",
                    150,
                    "Interior only deep clean",
                    ["Interior vacuum", "Window cleaning", "Panel wipe down", "Odor removal"],
                    "Basic detail (interior only)",
                ),
                tier(
                    "Diamond Detail",
                    350,
                    "Premium with paint correction",
                    ["Everything in Premium", "Clay bar", "3-month sealant", "Leather conditioning"],
                    "Diamond Detail (Paint Correction Detail)",
                ),
                tier(
                    "Paint Protection",
                    700,
                    "3-year ceramic coating",
                    ["Full protection", "Water repellent", "UV protection", "Long-lasting shine"],
                    "Paint Protection",
                ),
            ],
            add_ons: vec![
                add_on("Paint Correction", 150),
                add_on("Headlight Restoration", 50),
                add_on("Pet Hair Removal", 25),
                add_on("Clay Bar Treatment", 50),
                add_on("Engine Bay Cleaning", 50),
                add_on("Stain Removal", 50),
            ],
            gallery: (119..=122)
                .map(|n| format!("/cars/IMG-20251119-WA0{n}.jpg"))
                .collect(),
            testimonials: vec![
                testimonial(
                    "John Smith",
                    "Crystal Clear did an amazing job on my car! It looks brand new. Highly recommend their mobile service.",
                ),
                testimonial(
                    "Sarah Johnson",
                    "Professional, thorough, and convenient. Tallyn and his team exceeded my expectations!",
                ),
                testimonial(
                    "Mike Davis",
                    "Best detailing service in the area. The attention to detail is incredible. Worth every penny!",
                ),
            ],
            service_areas: vec![
                area("Parker", true),
                area("Castle Rock", true),
                area("Franktown", true),
                area("Elizabeth", true),
                area("Denver Metro", false),
            ],
        }
    }

    /// Dropdown options for the booking form, cheapest first.
    pub fn package_options(&self) -> Vec<PackageOption> {
        let mut tiers: Vec<&ServiceTier> = self.services.iter().collect();
        tiers.sort_by_key(|t| t.price);
        tiers
            .into_iter()
            .map(|t| PackageOption {
                value: t.package.clone(),
                label: format!("{} - {}", t.title, format_price(t.price)),
            })
            .collect()
    }

    pub fn find_package(&self, value: &str) -> Option<&ServiceTier> {
        self.services.iter().find(|t| t.package == value)
    }
}
