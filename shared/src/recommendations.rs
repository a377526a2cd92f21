//! Interpretation and recommendation text
//!
//! All advice is static content selected by the BMI category and a few
//! profile conditions. The tables below are the whole dictionary; nothing is
//! generated.

use crate::health_metrics::{classify_bmi, ActivityLevel, BmiCategory, Gender};

// ============================================================================
// Interpretation
// ============================================================================

/// One-sentence reading of a BMI category
pub fn interpretation(category: BmiCategory) -> &'static str {
    match category {
        BmiCategory::Underweight => {
            "Your BMI suggests you are underweight. This may indicate insufficient nutrition or other health concerns."
        }
        BmiCategory::Normal => {
            "Your BMI is in the healthy range. Maintain your balanced diet and active lifestyle."
        }
        BmiCategory::Overweight => {
            "Your BMI suggests you are overweight. Consider lifestyle changes to improve your health."
        }
        BmiCategory::Obese => {
            "Your BMI suggests obesity. It would be beneficial to consult with Dr. Sania for a personalized plan."
        }
    }
}

// ============================================================================
// Recommendation Tables
// ============================================================================

pub const UNDERWEIGHT_RECOMMENDATIONS: [&str; 4] = [
    "Increase calorie intake with nutrient-dense foods",
    "Focus on healthy weight gain through balanced meals",
    "Consider strength training to build muscle mass",
    "Eat frequent, smaller meals if appetite is low",
];

pub const NORMAL_RECOMMENDATIONS: [&str; 4] = [
    "Maintain your current healthy habits",
    "Continue eating a variety of nutrient-rich foods",
    "Stay physically active with a mix of cardio and strength training",
    "Monitor your weight periodically to maintain your healthy range",
];

pub const OVERWEIGHT_RECOMMENDATIONS: [&str; 4] = [
    "Aim for gradual weight loss of 0.5-1kg per week",
    "Increase physical activity to at least 150 minutes per week",
    "Focus on portion control and mindful eating",
    "Reduce intake of processed foods and sugary beverages",
];

pub const OBESE_RECOMMENDATIONS: [&str; 4] = [
    "Seek professional guidance for weight management",
    "Aim for sustainable lifestyle changes rather than quick fixes",
    "Incorporate both diet and exercise modifications",
    "Address any emotional or behavioral aspects of eating",
];

pub const SEDENTARY_OVERWEIGHT_RECOMMENDATIONS: [&str; 2] = [
    "Start with light physical activity like walking 10-15 minutes daily",
    "Gradually increase your activity level to meet guidelines",
];

pub const OVER_50_RECOMMENDATIONS: [&str; 2] = [
    "Ensure adequate protein intake to preserve muscle mass",
    "Consider calcium and vitamin D for bone health",
];

pub const FEMALE_RECOMMENDATIONS: [&str; 1] = [
    "Ensure adequate iron intake, especially if premenopausal",
];

/// Base advice for a BMI category
pub fn category_recommendations(category: BmiCategory) -> &'static [&'static str] {
    match category {
        BmiCategory::Underweight => &UNDERWEIGHT_RECOMMENDATIONS,
        BmiCategory::Normal => &NORMAL_RECOMMENDATIONS,
        BmiCategory::Overweight => &OVERWEIGHT_RECOMMENDATIONS,
        BmiCategory::Obese => &OBESE_RECOMMENDATIONS,
    }
}

/// Profile condition that unlocks an extra block of advice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Sedentary with a BMI of 25 or more
    SedentaryAndOverweight,
    /// Older than 50
    Over50,
    Female,
}

/// Profile facts the conditions are evaluated against
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext {
    pub bmi: f64,
    pub age_years: u32,
    pub gender: Gender,
    /// `None` for a level the calculator does not recognize
    pub activity_level: Option<ActivityLevel>,
}

impl Condition {
    pub fn holds(&self, ctx: &RecommendationContext) -> bool {
        match self {
            Condition::SedentaryAndOverweight => {
                ctx.activity_level == Some(ActivityLevel::Sedentary) && ctx.bmi >= 25.0
            }
            Condition::Over50 => ctx.age_years > 50,
            Condition::Female => ctx.gender == Gender::Female,
        }
    }
}

/// Conditional blocks appended after the category block, in display order
pub const CONDITIONAL_RECOMMENDATIONS: [(Condition, &[&str]); 3] = [
    (Condition::SedentaryAndOverweight, &SEDENTARY_OVERWEIGHT_RECOMMENDATIONS),
    (Condition::Over50, &OVER_50_RECOMMENDATIONS),
    (Condition::Female, &FEMALE_RECOMMENDATIONS),
];

/// Ordered advice for a profile: the category block first, then every
/// conditional block whose condition holds.
pub fn generate_recommendations(
    bmi: f64,
    age_years: u32,
    gender: Gender,
    activity_level: Option<ActivityLevel>,
) -> Vec<&'static str> {
    let ctx = RecommendationContext {
        bmi,
        age_years,
        gender,
        activity_level,
    };

    let mut recommendations = category_recommendations(classify_bmi(bmi)).to_vec();
    for (condition, items) in CONDITIONAL_RECOMMENDATIONS {
        if condition.holds(&ctx) {
            recommendations.extend_from_slice(items);
        }
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_full_recommendation_sequence() {
        let recs = generate_recommendations(32.0, 60, Gender::Female, Some(ActivityLevel::Sedentary));

        let mut expected: Vec<&str> = OBESE_RECOMMENDATIONS.to_vec();
        expected.extend_from_slice(&SEDENTARY_OVERWEIGHT_RECOMMENDATIONS);
        expected.extend_from_slice(&OVER_50_RECOMMENDATIONS);
        expected.extend_from_slice(&FEMALE_RECOMMENDATIONS);

        assert_eq!(recs.len(), 9);
        assert_eq!(recs, expected);
        assert_eq!(recs[0], "Seek professional guidance for weight management");
        assert_eq!(recs[8], "Ensure adequate iron intake, especially if premenopausal");
    }

    #[test]
    fn test_only_category_block_when_no_condition_holds() {
        let recs = generate_recommendations(22.0, 30, Gender::Male, Some(ActivityLevel::ModeratelyActive));
        assert_eq!(recs, NORMAL_RECOMMENDATIONS.to_vec());
    }

    #[rstest]
    #[case(24.9, Some(ActivityLevel::Sedentary), 4)]
    #[case(25.0, Some(ActivityLevel::Sedentary), 6)]
    #[case(27.0, Some(ActivityLevel::LightlyActive), 4)]
    #[case(45.0, Some(ActivityLevel::Sedentary), 6)]
    #[case(45.0, None, 4)]
    fn test_sedentary_block_needs_bmi_25(
        #[case] bmi: f64,
        #[case] activity: Option<ActivityLevel>,
        #[case] expected_len: usize,
    ) {
        let recs = generate_recommendations(bmi, 30, Gender::Male, activity);
        assert_eq!(recs.len(), expected_len);
    }

    #[rstest]
    #[case(50, 4)]
    #[case(51, 6)]
    fn test_age_block_starts_after_50(#[case] age: u32, #[case] expected_len: usize) {
        let recs = generate_recommendations(22.0, age, Gender::Male, Some(ActivityLevel::VeryActive));
        assert_eq!(recs.len(), expected_len);
    }

    #[test]
    fn test_underweight_block_first() {
        let recs = generate_recommendations(17.0, 25, Gender::Female, Some(ActivityLevel::Sedentary));
        assert_eq!(&recs[..4], &UNDERWEIGHT_RECOMMENDATIONS);
        assert_eq!(recs[4], FEMALE_RECOMMENDATIONS[0]);
        assert_eq!(recs.len(), 5);
    }

    #[test]
    fn test_obese_interpretation_mentions_referral() {
        assert!(interpretation(BmiCategory::Obese).contains("Dr. Sania"));
        assert!(interpretation(BmiCategory::Normal).starts_with("Your BMI is in the healthy range"));
    }
}
