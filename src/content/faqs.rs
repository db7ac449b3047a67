use crate::seo::structured_data::Faq;

pub struct FaqSection {
    pub heading: &'static str,
    pub entries: &'static [Faq<'static>],
}

pub const FAQ_SECTIONS: &[FaqSection] = &[
    FaqSection {
        heading: "Working With Us",
        entries: &[
            Faq {
                question: "Do you charge for a consultation?",
                answer: "No. Consultations are free. We are paid by the insurance carriers, so your premium is the same whether you enroll through us or directly.",
            },
            Faq {
                question: "Which states do you serve?",
                answer: "We are licensed in Hawaii, California, Nevada, Utah and Washington.",
            },
            Faq {
                question: "Can we meet in person?",
                answer: "Yes. We meet clients at our Honolulu office, and by phone or video anywhere we are licensed.",
            },
        ],
    },
    FaqSection {
        heading: "Medicare",
        entries: &[
            Faq {
                question: "When should I start planning for Medicare?",
                answer: "About three months before the month you turn 65. Your Initial Enrollment Period runs for seven months around your birthday month.",
            },
            Faq {
                question: "Can I change my Medicare plan every year?",
                answer: "Yes. During the Annual Enrollment Period from October 15 to December 7 you can switch Medicare Advantage and Part D plans for the next year.",
            },
        ],
    },
    FaqSection {
        heading: "Employers",
        entries: &[
            Faq {
                question: "What size businesses do you work with?",
                answer: "Employers with as few as two employees up to several hundred.",
            },
            Faq {
                question: "Do you help with Hawaii Prepaid Health Care Act requirements?",
                answer: "Yes. We review eligibility rules and contribution limits with you at every renewal.",
            },
        ],
    },
];

/// All entries in page order.
pub fn all_faqs() -> Vec<Faq<'static>> {
    FAQ_SECTIONS
        .iter()
        .flat_map(|section| section.entries.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_faqs_keeps_page_order() {
        let faqs = all_faqs();
        let expected: usize = FAQ_SECTIONS.iter().map(|s| s.entries.len()).sum();
        assert_eq!(faqs.len(), expected);
        assert_eq!(faqs[0].question, "Do you charge for a consultation?");
        assert_eq!(
            faqs.last().unwrap().question,
            "Do you help with Hawaii Prepaid Health Care Act requirements?"
        );
    }
}
