//! Step import and data import expansion

use std::borrow::Cow;

use pageflow_model::Step;
use pageflow_provider::{DataSetProvider, StepProvider};
use tracing::debug;

use crate::{error::ResolutionError, util::ImportStack};

/// Expands a step's import.
///
/// The imported step's actions and assertions are placed before the step's
/// own, and the import name is cleared. An imported step that has an import
/// of its own is expanded first. A data import is left in place.
///
/// Returns the step unchanged if it has no import.
///
/// # Errors
///
/// - a circular step import error naming the first import name revisited
/// - an unknown item error if an imported step does not exist
pub fn resolve_step_import<'a>(
    step: &'a Step,
    steps: &dyn StepProvider,
) -> Result<Cow<'a, Step>, ResolutionError> {
    resolve_step_import_inner(step, steps, &mut ImportStack::new())
}

fn resolve_step_import_inner<'a>(
    step: &'a Step,
    steps: &dyn StepProvider,
    import_stack: &mut ImportStack,
) -> Result<Cow<'a, Step>, ResolutionError> {
    let Some(import_name) = step.import_name() else {
        return Ok(Cow::Borrowed(step));
    };

    if import_stack.contains(import_name) {
        debug!(import_name, "circular step import");
        return Err(ResolutionError::circular_step_import(import_name));
    }

    let parent = steps.find_step(import_name)?;
    let parent = if parent.is_pending() {
        import_stack.push(import_name);
        let parent = resolve_step_import_inner(parent, steps, import_stack)?;
        import_stack.pop();
        parent
    } else {
        Cow::Borrowed(parent)
    };

    debug!(import_name, "expanded step import");

    let step = step
        .clone()
        .with_prepended_actions(parent.actions())
        .with_prepended_assertions(parent.assertions())
        .without_import_name();

    Ok(Cow::Owned(step))
}

/// Attaches the data-set collection named by a step's data import.
///
/// Returns the step unchanged if it has no data import.
///
/// # Errors
///
/// Returns an unknown item error if the data-set collection does not exist.
pub fn resolve_data_import<'a>(
    step: &'a Step,
    data_sets: &dyn DataSetProvider,
) -> Result<Cow<'a, Step>, ResolutionError> {
    let Some(data_import_name) = step.data_import_name() else {
        return Ok(Cow::Borrowed(step));
    };

    let data = data_sets.find_data_set_collection(data_import_name)?;
    debug!(data_import_name, data_sets = data.len(), "attached data import");

    let step = step
        .clone()
        .with_data(data.clone())
        .without_data_import_name();

    Ok(Cow::Owned(step))
}

#[cfg(test)]
mod tests {
    use pageflow_provider::{DataSets, Steps, UnknownItemError};
    use rstest::rstest;

    use super::*;
    use crate::{
        error::ResolutionErrorKind,
        test::construct::{ProvidersBuilder, click, data_sets, exists, is, step, wait},
    };

    #[test]
    fn step_without_import_is_unchanged() {
        let step = step(vec![wait("1")], vec![exists("$\".heading\"")]);

        let resolved = resolve_step_import(&step, &Steps::default()).expect("should resolve");

        assert!(matches!(resolved, Cow::Borrowed(borrowed) if std::ptr::eq(borrowed, &step)));
    }

    #[test]
    fn imported_step_is_prepended() {
        let steps = ProvidersBuilder::new()
            .with_step(
                "parent",
                step(vec![click("$\".parent\"")], vec![exists("$\".parent\"")]),
            )
            .build_steps();
        let step = step(vec![click("$\".child\"")], vec![exists("$\".child\"")])
            .with_import_name("parent");

        let resolved = resolve_step_import(&step, &steps).expect("should resolve");

        assert_eq!(
            *resolved,
            Step::new(
                vec![click("$\".parent\""), click("$\".child\"")],
                vec![exists("$\".parent\""), exists("$\".child\"")],
            )
        );
    }

    #[test]
    fn deferred_import_chain_is_expanded_parent_first() {
        let steps = ProvidersBuilder::new()
            .with_step(
                "grandparent",
                step(vec![click("$\".one\"")], vec![is("$page.title", "\"One\"")]),
            )
            .with_step(
                "parent",
                step(vec![click("$\".two\"")], vec![]).with_import_name("grandparent"),
            )
            .build_steps();
        let step = step(vec![click("$\".three\"")], vec![]).with_import_name("parent");

        let resolved = resolve_step_import(&step, &steps).expect("should resolve");

        assert_eq!(
            resolved.actions(),
            [click("$\".one\""), click("$\".two\""), click("$\".three\"")]
        );
        assert_eq!(resolved.assertions(), [is("$page.title", "\"One\"")]);
        assert_eq!(resolved.import_name(), None);
    }

    #[test]
    fn data_import_survives_step_import() {
        let steps = ProvidersBuilder::new()
            .with_step("parent", step(vec![], vec![]))
            .build_steps();
        let step = step(vec![], vec![])
            .with_import_name("parent")
            .with_data_import_name("users");

        let resolved = resolve_step_import(&step, &steps).expect("should resolve");

        assert_eq!(resolved.import_name(), None);
        assert_eq!(resolved.data_import_name(), Some("users"));
    }

    #[test]
    fn parent_with_only_data_import_is_used_as_is() {
        let steps = ProvidersBuilder::new()
            .with_step(
                "parent",
                step(vec![wait("1")], vec![]).with_data_import_name("users"),
            )
            .build_steps();
        let step = step(vec![], vec![]).with_import_name("parent");

        let resolved = resolve_step_import(&step, &steps).expect("should resolve");

        assert_eq!(resolved.actions(), [wait("1")]);
        assert_eq!(resolved.data_import_name(), None);
    }

    #[test]
    fn unknown_step() {
        let step = step(vec![], vec![]).with_import_name("missing");

        let Err(error) = resolve_step_import(&step, &Steps::default()) else {
            panic!("expected unknown step error");
        };
        assert_eq!(
            error.kind(),
            &ResolutionErrorKind::UnknownItem(UnknownItemError::step("missing"))
        );
    }

    #[rstest]
    #[case::direct_self_reference(&[("start", "start")], "start", "start")]
    #[case::indirect_self_reference(&[("start", "middle"), ("middle", "start")], "start", "start")]
    #[case::indirect_reference(
        &[("one", "two"), ("two", "three"), ("three", "two")],
        "one",
        "two"
    )]
    fn circular_import(
        #[case] imports: &[(&str, &str)],
        #[case] start: &str,
        #[case] expected: &str,
    ) {
        let steps: Steps = imports
            .iter()
            .map(|(name, import_name)| (*name, Step::default().with_import_name(*import_name)))
            .collect();
        let step = Step::default().with_import_name(start);

        let Err(error) = resolve_step_import(&step, &steps) else {
            panic!("expected circular step import error");
        };
        assert_eq!(
            error.kind(),
            &ResolutionErrorKind::CircularStepImport {
                import_name: expected.to_string()
            }
        );
    }

    #[test]
    fn step_without_data_import_is_unchanged() {
        let step = step(vec![wait("1")], vec![]);

        let resolved = resolve_data_import(&step, &DataSets::default()).expect("should resolve");

        assert!(matches!(resolved, Cow::Borrowed(_)));
    }

    #[test]
    fn data_import_is_attached() {
        let users = data_sets(&[("0", &[("username", "alice")]), ("1", &[("username", "bob")])]);
        let (_, _, data_sets) = ProvidersBuilder::new()
            .with_data_sets("users", users.clone())
            .build();
        let step = step(vec![wait("1")], vec![])
            .with_import_name("parent")
            .with_data_import_name("users");

        let resolved = resolve_data_import(&step, &data_sets).expect("should resolve");

        assert_eq!(resolved.data(), Some(&users));
        assert_eq!(resolved.data_import_name(), None);
        assert_eq!(resolved.import_name(), Some("parent"));
    }

    #[test]
    fn unknown_data_set() {
        let step = step(vec![], vec![]).with_data_import_name("missing");

        let Err(error) = resolve_data_import(&step, &DataSets::default()) else {
            panic!("expected unknown data set error");
        };
        assert_eq!(error.to_string(), "Unknown data set \"missing\"");
    }
}
