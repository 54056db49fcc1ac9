//! Deterministic negotiation guidance: talking points, an email draft and a
//! skills-gap checklist.

use serde::{Deserialize, Serialize};

use crate::format::format_inr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationInput {
    pub role: String,
    pub experience: f64,
    pub current_salary: f64,
    pub target_salary: f64,
    pub market_average: f64,
}

/// How far the target sits from the market average, in percent.
/// Positive means above market. Zero when the market average is unknown.
pub fn target_vs_market(target_salary: f64, market_average: f64) -> f64 {
    if market_average <= 0.0 {
        return 0.0;
    }
    (target_salary / market_average - 1.0) * 100.0
}

/// Five numbered tips, Markdown formatted.
pub fn negotiation_tips(input: &NegotiationInput) -> String {
    let delta = target_vs_market(input.target_salary, input.market_average);
    let direction = if input.target_salary > input.market_average {
        "above"
    } else {
        "below"
    };
    let raise = crate::stats::percentage_change(input.current_salary, input.target_salary);

    format!(
        "**Negotiation Tips for {role}:**\n\
         \n\
         1. **Know Your Worth**: The market average is {market}. You're asking for {target}, \
         which is {delta:.1}% {direction} market rate and a {raise:.1}% raise on your current {current}.\n\
         \n\
         2. **Timing is Key**: Schedule the conversation after a major achievement or positive performance review.\n\
         \n\
         3. **Use Data**: Reference industry benchmarks for {years} years of experience and your specific contributions to the company.\n\
         \n\
         4. **Be Confident**: Practice your pitch beforehand and maintain a professional, confident tone.\n\
         \n\
         5. **Consider Total Compensation**: If salary flexibility is limited, negotiate for bonuses, stock options, or additional benefits.",
        role = input.role,
        market = format_inr(input.market_average),
        target = format_inr(input.target_salary),
        current = format_inr(input.current_salary),
        delta = delta.abs(),
        years = input.experience,
    )
}

/// Email draft requesting a salary discussion. Bracketed fields are for the
/// sender to fill in.
pub fn email_template(role: &str, target_salary: f64) -> String {
    format!(
        "Subject: Request for Salary Discussion\n\
         \n\
         Dear [Manager's Name],\n\
         \n\
         I hope this email finds you well. I would like to schedule a meeting to discuss my compensation.\n\
         \n\
         Over the past [time period], I have [list key achievements and contributions]. \
         Based on my research of market rates for {role} positions with my experience level, \
         I believe my current compensation could be adjusted to better reflect my contributions and market standards.\n\
         \n\
         According to industry data, the average salary for this role is approximately {target}. \
         I would appreciate the opportunity to discuss this with you.\n\
         \n\
         Would you be available for a brief meeting this week?\n\
         \n\
         Thank you for your consideration.\n\
         \n\
         Best regards,\n\
         [Your Name]",
        target = format_inr(target_salary),
    )
}

/// Skills to pick up for a target role, each paired with a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsGap {
    pub target_role: String,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Baseline skills and how to learn them. Applies to every target role.
pub const BASELINE_SKILLS: [(&str, &str); 3] = [
    (
        "Cloud Computing",
        "Take online courses in cloud platforms (AWS/Azure)",
    ),
    ("System Design", "Practice system design problems"),
    ("Leadership", "Lead small team projects"),
];

/// Baseline skills not already in `current_skills` (case-insensitive), with
/// their recommendations in the same order.
pub fn skills_gap(current_skills: &[String], target_role: &str) -> SkillsGap {
    let (missing_skills, recommendations): (Vec<String>, Vec<String>) = BASELINE_SKILLS
        .iter()
        .filter(|(skill, _)| {
            !current_skills
                .iter()
                .any(|held| held.trim().eq_ignore_ascii_case(skill))
        })
        .map(|&(skill, advice)| (skill.to_string(), advice.to_string()))
        .unzip();

    SkillsGap {
        target_role: target_role.to_string(),
        missing_skills,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NegotiationInput {
        NegotiationInput {
            role: "Data Scientist".into(),
            experience: 4.0,
            current_salary: 1_000_000.0,
            target_salary: 1_300_000.0,
            market_average: 1_200_000.0,
        }
    }

    #[test]
    fn target_delta() {
        assert!((target_vs_market(1_300_000.0, 1_200_000.0) - 8.333_333).abs() < 1e-5);
        assert_eq!(target_vs_market(1_000.0, 0.0), 0.0);
    }

    #[test]
    fn tips_quote_market_position() {
        let tips = negotiation_tips(&input());
        assert!(tips.starts_with("**Negotiation Tips for Data Scientist:**"));
        assert!(tips.contains("8.3% above market rate"));
        assert!(tips.contains("30.0% raise"));
        assert!(tips.contains("₹12,00,000"));
        assert_eq!(tips.matches("**").count(), 12);
    }

    #[test]
    fn tips_below_market() {
        let mut i = input();
        i.target_salary = 1_080_000.0;
        assert!(negotiation_tips(&i).contains("10.0% below market rate"));
    }

    #[test]
    fn email_mentions_role_and_target() {
        let email = email_template("Tech Lead", 2_500_000.0);
        assert!(email.starts_with("Subject: Request for Salary Discussion"));
        assert!(email.contains("Tech Lead positions"));
        assert!(email.contains("₹25,00,000"));
        assert!(email.ends_with("[Your Name]"));
    }

    #[test]
    fn skills_gap_lists_baseline_for_newcomer() {
        let gap = skills_gap(&["Java".to_string()], "Tech Lead");
        assert_eq!(gap.target_role, "Tech Lead");
        assert_eq!(
            gap.missing_skills,
            vec!["Cloud Computing", "System Design", "Leadership"]
        );
        assert_eq!(gap.recommendations.len(), 3);
        assert_eq!(gap.recommendations[1], "Practice system design problems");
    }

    #[test]
    fn skills_gap_skips_held_skills() {
        let held = vec![" system design".to_string(), "LEADERSHIP".to_string()];
        let gap = skills_gap(&held, "Architect");
        assert_eq!(gap.missing_skills, vec!["Cloud Computing"]);
        assert_eq!(
            gap.recommendations,
            vec!["Take online courses in cloud platforms (AWS/Azure)"]
        );
    }
}
