//! Execution plan selection.
//!
//! Independent domains (crop, pest, finance, market) can be answered on
//! their own; dependent ones (irrigation, harvest, inputs) build on them.
//! A mix of both runs hierarchically, independent first.

use krishi_shared::{Domain, DomainClass, ExecutionPlan};

pub fn plan_execution(
    domains: &[Domain],
    agents: &[String],
    max_parallel_agents: usize,
) -> ExecutionPlan {
    if agents.len() <= 1 {
        return ExecutionPlan::Single;
    }

    let has_class = |class: DomainClass| domains.iter().any(|d| d.class() == Some(class));
    if has_class(DomainClass::Independent) && has_class(DomainClass::Dependent) {
        ExecutionPlan::Hierarchical
    } else if agents.len() <= max_parallel_agents {
        ExecutionPlan::Parallel
    } else {
        ExecutionPlan::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agents(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("agent_{}", i)).collect()
    }

    #[test]
    fn test_zero_or_one_agent_is_single() {
        let mixed = [Domain::CropSelection, Domain::Irrigation];
        assert_eq!(plan_execution(&mixed, &agents(0), 3), ExecutionPlan::Single);
        assert_eq!(plan_execution(&mixed, &agents(1), 3), ExecutionPlan::Single);
    }

    #[test]
    fn test_both_classes_is_hierarchical() {
        let domains = [Domain::PestManagement, Domain::Irrigation];
        assert_eq!(plan_execution(&domains, &agents(2), 3), ExecutionPlan::Hierarchical);
        assert_eq!(plan_execution(&domains, &agents(6), 3), ExecutionPlan::Hierarchical);
    }

    #[test]
    fn test_one_class_parallel_up_to_cap() {
        let domains = [Domain::MarketTiming, Domain::FinancePolicy];
        assert_eq!(plan_execution(&domains, &agents(2), 3), ExecutionPlan::Parallel);
        assert_eq!(plan_execution(&domains, &agents(3), 3), ExecutionPlan::Parallel);
        assert_eq!(plan_execution(&domains, &agents(4), 3), ExecutionPlan::Sequential);
    }

    #[test]
    fn test_general_belongs_to_no_class() {
        let domains = [Domain::General, Domain::Irrigation];
        assert_eq!(plan_execution(&domains, &agents(2), 3), ExecutionPlan::Parallel);
    }

    #[test]
    fn test_custom_cap() {
        let domains = [Domain::HarvestPlanning, Domain::InputMaterials];
        assert_eq!(plan_execution(&domains, &agents(2), 1), ExecutionPlan::Sequential);
    }
}
