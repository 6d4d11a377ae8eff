// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

#[cfg(test)]
mod integration_tests {
    use std::collections::HashSet;

    use crate::engine::{
        convert, plan_expression, validate, verify_plan, Operand, SequentialVariables, Sign,
        TaskPlan, UuidVariables, VariableId,
    };
    use crate::errors::PlanningError;

    /// Expressions the validator accepts, from trivial to deeply nested.
    const VALID_EXPRESSIONS: &[&str] = &[
        "42",
        "3.14",
        "(7)",
        "((7))",
        "~7",
        "~~7",
        "~(2+3)",
        "2+3*4",
        "2*3+4",
        "2^3^4",
        "8/4/2",
        "8-4-2",
        "~5+3",
        "~2^2",
        "2^~2",
        "(1+2)*(3+4)",
        "((1+2)*3-4)/5^6",
        "1.5 * (2 - 0.25) / ~3",
        "~(1.5^2^~3)/(4-5*6)+7",
        "1+2+3+4+5+6+7+8+9+10",
        "(((((1+2)))))",
    ];

    fn plan(infix: &str) -> TaskPlan {
        let variables = SequentialVariables::new("v");
        plan_expression(infix, "example-1", &variables).unwrap()
    }

    /// Render tasks as `(num1,num2,sign)->variable` for compact assertions.
    fn render(plan: &TaskPlan) -> Vec<String> {
        plan.tasks()
            .iter()
            .map(|t| format!("({},{},{})->{}", t.num1, t.num2, t.sign, t.variable))
            .collect()
    }

    /// Replace generated variables with their producer's index so two plans can
    /// be compared independently of the identifiers they were given.
    fn shape(plan: &TaskPlan) -> Vec<(String, String, Sign, bool)> {
        let producers: std::collections::HashMap<&VariableId, usize> = plan
            .tasks()
            .iter()
            .map(|t| (&t.variable, t.index))
            .collect();
        let name = |operand: &Operand| match operand {
            Operand::Literal(text) => text.clone(),
            Operand::Variable(variable) => format!("#{}", producers[variable]),
        };
        plan.tasks()
            .iter()
            .map(|t| (name(&t.num1), name(&t.num2), t.sign, t.is_final))
            .collect()
    }

    #[test]
    fn test_precedence_end_to_end() {
        assert_eq!(convert("2+3*4").unwrap().to_string(), "2 3 4 * +");

        let plan = plan("2+3*4");
        assert_eq!(render(&plan), vec!["(3,4,*)->v1", "(2,v1,+)->v2"]);
        assert!(plan.tasks()[1].is_final);
        assert_eq!(plan.final_variable().as_str(), "v2");
    }

    #[test]
    fn test_power_is_right_associative_end_to_end() {
        assert_eq!(convert("2^3^4").unwrap().to_string(), "2 3 4 ^ ^");
        assert_eq!(render(&plan("2^3^4")), vec!["(3,4,^)->v1", "(2,v1,^)->v2"]);
    }

    #[test]
    fn test_subtraction_and_division_are_left_associative() {
        assert_eq!(render(&plan("8-4-2")), vec!["(8,4,-)->v1", "(v1,2,-)->v2"]);
        assert_eq!(render(&plan("8/4/2")), vec!["(8,4,/)->v1", "(v1,2,/)->v2"]);
    }

    #[test]
    fn test_unary_minus_end_to_end() {
        let plan = plan("~5+3");

        assert_eq!(render(&plan), vec!["(0,5,-)->v1", "(v1,3,+)->v2"]);
        assert!(plan.tasks()[1].is_final);
    }

    #[test]
    fn test_bare_literal_end_to_end() {
        let plan = plan("42");

        assert_eq!(render(&plan), vec!["(0,42,+)->v1"]);
        assert!(plan.tasks()[0].is_final);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        assert_eq!(render(&plan(" 2 +\t3 * 4 ")), render(&plan("2+3*4")));
    }

    #[test]
    fn test_malformed_inputs_are_rejected() {
        let variables = SequentialVariables::new("v");
        for infix in ["", "2++3", "(2+3", "2+", "2.+3", ")2+3(", "()", "2(3)", "abc", "1.2.3"] {
            assert!(!validate(infix), "validator accepted {infix:?}");

            let error = plan_expression(infix, "example-1", &variables).unwrap_err();
            assert!(error.is_malformed(), "{infix:?} gave {error:?}");
        }
    }

    #[test]
    fn test_every_accepted_expression_plans_and_verifies() {
        for infix in VALID_EXPRESSIONS {
            assert!(validate(infix), "validator rejected {infix:?}");

            let variables = SequentialVariables::new("v");
            let plan = match plan_expression(infix, "example-1", &variables) {
                Ok(plan) => plan,
                Err(PlanningError::Malformed(_)) => panic!("{infix:?} was rejected"),
                Err(PlanningError::Internal(error)) => panic!("{infix:?} failed: {error}"),
            };
            assert_eq!(verify_plan(&plan), Ok(()), "{infix:?}");
        }
    }

    #[test]
    fn test_task_count_matches_operator_count() {
        for infix in VALID_EXPRESSIONS {
            let postfix = convert(infix).unwrap();
            let expected = postfix.operator_count().max(1);

            assert_eq!(plan(infix).len(), expected, "{infix:?}");
        }
    }

    #[test]
    fn test_every_variable_operand_has_one_earlier_producer() {
        for infix in VALID_EXPRESSIONS {
            let plan = plan(infix);
            let mut produced: HashSet<&VariableId> = HashSet::new();

            for task in plan.tasks() {
                for dependency in task.dependencies() {
                    assert!(produced.contains(dependency), "{infix:?}: {task}");
                }
                assert!(produced.insert(&task.variable), "{infix:?}: duplicate {task}");
            }

            let finals: Vec<_> = plan.tasks().iter().filter(|t| t.is_final).collect();
            assert_eq!(finals.len(), 1, "{infix:?}");
            assert_eq!(&finals[0].variable, plan.final_variable());
        }
    }

    #[test]
    fn test_planning_is_idempotent_modulo_identifiers() {
        for infix in VALID_EXPRESSIONS {
            let first = plan_expression(infix, "example-1", &UuidVariables).unwrap();
            let second = plan_expression(infix, "example-1", &UuidVariables).unwrap();

            assert_ne!(first.final_variable(), second.final_variable());
            assert_eq!(shape(&first), shape(&second), "{infix:?}");
        }
    }

    #[test]
    fn test_uuid_variables_never_read_as_literals() {
        let plan = plan_expression("(1+2)*(3+4)", "example-1", &UuidVariables).unwrap();
        let json = serde_json::to_string(plan.tasks()).unwrap();
        let decoded: Vec<crate::engine::Task> = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, plan.tasks());
        assert!(decoded[2].num1.as_variable().is_some());
        assert!(decoded[2].num2.as_variable().is_some());
    }

    #[test]
    fn test_levels_agree_with_index_order() {
        for infix in VALID_EXPRESSIONS {
            let plan = plan(infix);
            let tasks = plan.tasks();
            let levels = plan.dependency_levels();
            let level_of: std::collections::HashMap<&VariableId, usize> = levels
                .iter()
                .enumerate()
                .flat_map(|(level, positions)| {
                    positions
                        .iter()
                        .map(move |&position| (&tasks[position].variable, level))
                })
                .collect();

            for task in tasks {
                for dependency in task.dependencies() {
                    assert!(level_of[dependency] < level_of[&task.variable], "{infix:?}");
                }
            }
            assert_eq!(levels.last().map(Vec::len), Some(1), "{infix:?}");
        }
    }
}
