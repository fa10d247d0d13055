//! Text rendering of calculation results and of the rule set in use.
//!
//! Wording follows the pt-BR simulator screens: a headline with the monthly
//! gain, a card explaining which rule applied, and a side-by-side of the
//! current and proposed scenarios.

use std::fmt;

use irpf_core::{CalculationResult, ProposedRules, RuleApplied};

use crate::utils::{format_amount, format_percent};

const GAIN_HEADLINE: &str = "Aumento no seu salário líquido mensal";
const DISCLAIMER: &str = "Estes valores são para fins de simulação, baseados em uma proposta. \
                          A lei final pode ter parâmetros diferentes.";

/// Title and explanation shown for the rule that produced a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCard {
    pub title: &'static str,
    pub description: String,
}

impl RuleCard {
    pub fn for_result(
        result: &CalculationResult,
        rules: &ProposedRules,
    ) -> Self {
        match result.rule_applied() {
            RuleApplied::Exemption => Self {
                title: "Isento de Imposto de Renda",
                description: format!(
                    "Pela nova proposta, salários até {} são isentos.",
                    format_amount(rules.exemption_limit)
                ),
            },
            RuleApplied::Discount => Self {
                title: "Faixa com Desconto",
                description: format!(
                    "Seu salário se enquadra na faixa com {} de desconto sobre o IR devido.",
                    format_percent(result.discount_applied().unwrap_or_default())
                ),
            },
            RuleApplied::Standard => Self {
                title: "Cálculo Padrão",
                description: "Para sua faixa salarial, não há mudanças. \
                              O cálculo segue a tabela padrão do IR."
                    .to_string(),
            },
            RuleApplied::Initial => Self {
                title: "Aguardando valor",
                description: "Insira seu salário para simular o cálculo.".to_string(),
            },
        }
    }
}

impl fmt::Display for RuleCard {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.description)
    }
}

/// Full report for one calculation.
pub struct ResultReport<'a> {
    result: &'a CalculationResult,
    rules: &'a ProposedRules,
}

impl<'a> ResultReport<'a> {
    pub fn new(
        result: &'a CalculationResult,
        rules: &'a ProposedRules,
    ) -> Self {
        Self { result, rules }
    }
}

impl fmt::Display for ResultReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let r = self.result;
        let card = RuleCard::for_result(r, self.rules);

        if r.rule_applied() == RuleApplied::Initial {
            writeln!(f, "{GAIN_HEADLINE}: -")?;
            return writeln!(f, "{card}");
        }

        writeln!(f, "{GAIN_HEADLINE}: {}", format_amount(r.net_difference))?;
        writeln!(f, "{card}")?;
        writeln!(f)?;
        writeln!(f, "{:<18}{:>18}{:>18}", "", "Cenário Atual", "Nova Proposta")?;
        writeln!(
            f,
            "{:<18}{:>18}{:>18}",
            "Salário Bruto",
            format_amount(r.monthly_salary),
            format_amount(r.monthly_salary)
        )?;
        writeln!(
            f,
            "{:<18}{:>18}{:>18}",
            "Imposto (IR)",
            format!("-{}", format_amount(r.current_tax)),
            format!("-{}", format_amount(r.final_tax))
        )?;
        writeln!(
            f,
            "{:<18}{:>18}{:>18}",
            "Salário Líquido",
            format_amount(r.current_net_salary()),
            format_amount(r.proposed_net_salary())
        )?;

        if let Some(details) = r.details() {
            writeln!(f)?;
            writeln!(
                f,
                "Alíquota {} · Dedução {}",
                format_percent(details.aliquot),
                format_amount(details.deduction)
            )?;
        }
        Ok(())
    }
}

/// Summary of the proposal rules in use.
pub struct RulesSummary<'a>(pub &'a ProposedRules);

impl fmt::Display for RulesSummary<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let rules = self.0;

        writeln!(f, "Regras da Proposta Utilizadas")?;
        writeln!(
            f,
            "  Isenção: salários de até {}",
            format_amount(rules.exemption_limit)
        )?;
        for tier in &rules.discount_tiers {
            writeln!(
                f,
                "  Desconto de {}: para salários {}",
                format_percent(tier.discount),
                tier.label
            )?;
        }
        writeln!(
            f,
            "  Sem Mudança: salários acima de {} seguem a tabela padrão.",
            format_amount(rules.standard_range_start)
        )?;
        writeln!(f, "{DISCLAIMER}")
    }
}

#[cfg(test)]
mod tests {
    use irpf_core::calculate_proposed_ir;
    use pretty_assertions::assert_eq;

    use super::*;

    fn report_for(salary: f64) -> String {
        let rules = ProposedRules::default();
        let result = calculate_proposed_ir(salary, &rules);
        ResultReport::new(&result, &rules).to_string()
    }

    // =========================================================================
    // RuleCard tests
    // =========================================================================

    #[test]
    fn rule_card_exemption_mentions_limit() {
        let rules = ProposedRules::default();
        let result = calculate_proposed_ir(3000.0, &rules);

        let card = RuleCard::for_result(&result, &rules);

        assert_eq!(card.title, "Isento de Imposto de Renda");
        assert_eq!(
            card.description,
            "Pela nova proposta, salários até R$ 5.000,00 são isentos."
        );
    }

    #[test]
    fn rule_card_discount_mentions_percentage() {
        let rules = ProposedRules::default();
        let result = calculate_proposed_ir(7000.0, &rules);

        let card = RuleCard::for_result(&result, &rules);

        assert_eq!(card.title, "Faixa com Desconto");
        assert!(card.description.contains("50% de desconto"));
    }

    #[test]
    fn rule_card_initial_asks_for_salary() {
        let rules = ProposedRules::default();

        let card = RuleCard::for_result(&CalculationResult::initial(), &rules);

        assert_eq!(card.title, "Aguardando valor");
    }

    // =========================================================================
    // ResultReport tests
    // =========================================================================

    #[test]
    fn report_initial_shows_placeholder_only() {
        let report = report_for(f64::NAN);

        assert_eq!(
            report,
            "Aumento no seu salário líquido mensal: -\n\
             [Aguardando valor] Insira seu salário para simular o cálculo.\n"
        );
    }

    #[test]
    fn report_discount_shows_both_scenarios() {
        let report = report_for(6000.0);

        assert!(report.starts_with("Aumento no seu salário líquido mensal: R$ 565,50\n"));
        assert!(report.contains("-R$ 754,00"));
        assert!(report.contains("-R$ 188,50"));
        assert!(report.contains("R$ 5.246,00"));
        assert!(report.contains("R$ 5.811,50"));
        assert!(report.contains("Alíquota 27,5% · Dedução R$ 896,00"));
    }

    #[test]
    fn report_standard_shows_zero_gain() {
        let report = report_for(10000.0);

        assert!(report.starts_with("Aumento no seu salário líquido mensal: R$ 0,00\n"));
        assert!(report.contains("[Cálculo Padrão]"));
    }

    // =========================================================================
    // RulesSummary tests
    // =========================================================================

    #[test]
    fn rules_summary_lists_every_tier() {
        let summary = RulesSummary(&ProposedRules::default()).to_string();

        assert!(summary.contains("Isenção: salários de até R$ 5.000,00"));
        assert!(summary.contains("Desconto de 75%: para salários até R$ 6.000,00"));
        assert!(summary.contains("Desconto de 50%: para salários de R$ 6.000,01 a R$ 7.350,00"));
        assert!(summary.contains("acima de R$ 7.350,00 seguem a tabela padrão"));
    }
}
