pub struct ServiceOffering {
    pub slug: &'static str,
    pub name: &'static str,
    /// schema.org `serviceType` label.
    pub service_type: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
}

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        slug: "medicare",
        name: "Medicare Planning",
        service_type: "Medicare Enrollment",
        summary: "Guidance through Medicare Advantage, Supplement and Part D options.",
        description: "We compare Medicare Advantage, Medigap and prescription drug plans side by side, explain enrollment windows, and help you enroll in the coverage that fits your doctors, prescriptions and budget.",
        highlights: &[
            "Initial enrollment and turning-65 reviews",
            "Annual plan reviews during the fall enrollment period",
            "Help with Special Enrollment Periods after a move or job change",
        ],
    },
    ServiceOffering {
        slug: "group-benefits",
        name: "Group Employee Benefits",
        service_type: "Employee Benefits Consulting",
        summary: "Medical, dental and vision programs for small and mid-size employers.",
        description: "We design and renew group medical, dental, vision and life programs for employers with 2 to 500 employees, including compliance with Hawaii's Prepaid Health Care Act and employee enrollment support.",
        highlights: &[
            "Plan design and carrier marketing at renewal",
            "Prepaid Health Care Act compliance for Hawaii employers",
            "On-site and virtual open enrollment meetings",
        ],
    },
    ServiceOffering {
        slug: "individual-health",
        name: "Individual & Family Health",
        service_type: "Health Insurance Enrollment",
        summary: "Marketplace and off-exchange plans for individuals and families.",
        description: "We help individuals, families and the self-employed choose marketplace or off-exchange health plans, check eligibility for premium tax credits and enroll before deadlines.",
        highlights: &[
            "Premium tax credit eligibility checks",
            "Network and prescription comparisons",
            "Year-round support with claims and billing questions",
        ],
    },
    ServiceOffering {
        slug: "life-insurance",
        name: "Life & Income Protection",
        service_type: "Life Insurance",
        summary: "Term, permanent and disability coverage to protect your household.",
        description: "We quote term and permanent life insurance along with individual disability coverage, and help you size a policy around your mortgage, dependents and retirement goals.",
        highlights: &[
            "Needs analysis for families and business owners",
            "Term and permanent life quotes from multiple carriers",
            "Individual disability income coverage",
        ],
    },
];

pub fn find_service(slug: &str) -> Option<&'static ServiceOffering> {
    SERVICES.iter().find(|service| service.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = SERVICES.iter().map(|s| s.slug).collect();
        assert_eq!(slugs.len(), SERVICES.len());
    }

    #[test]
    fn finds_service_by_slug() {
        let service = find_service("medicare").unwrap();
        assert_eq!(service.service_type, "Medicare Enrollment");
        assert!(find_service("pet-insurance").is_none());
    }
}
