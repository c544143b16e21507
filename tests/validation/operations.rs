use super::helpers::*;
use graphql_validator::ast::*;
use graphql_validator::GqlError;

#[test]
fn it_rejects_duplicate_operation_names() {
    // query a { dog { name } }  query a { dog { name } }
    let errors = expect_errors(vec![
        query(Some("a"), vec![field("dog", vec![leaf("name")])]),
        query(Some("a"), vec![field("dog", vec![leaf("name")])]),
    ]);
    assert_eq!(errors, [GqlError::NameNotUnique(n("a"))]);
}

#[test]
fn it_accepts_distinct_operation_names() {
    let result = validate(vec![
        query(Some("a"), vec![field("dog", vec![leaf("name")])]),
        query(Some("b"), vec![field("dog", vec![leaf("nickname")])]),
    ]);
    assert!(result.is_ok());
}

#[test]
fn it_rejects_an_anonymous_operation_with_company() {
    // { dog { name } }  query b { dog { name } }
    let errors = expect_errors(vec![
        query(None, vec![field("dog", vec![leaf("name")])]),
        query(Some("b"), vec![field("dog", vec![leaf("name")])]),
    ]);
    assert_eq!(errors, [GqlError::AnonymousQueryNotAlone]);
}

#[test]
fn it_rejects_two_anonymous_operations() {
    let errors = expect_errors(vec![
        query(None, vec![field("dog", vec![leaf("name")])]),
        query(None, vec![field("dog", vec![leaf("name")])]),
    ]);
    assert_eq!(errors, [GqlError::AnonymousQueryNotAlone]);
}

#[test]
fn it_accepts_a_lone_anonymous_operation() {
    assert!(validate(vec![query(None, vec![field("dog", vec![leaf("name")])])]).is_ok());
}

#[test]
fn it_rejects_subscriptions_with_two_root_fields() {
    // subscription s { newMessage { body }  other }
    let errors = expect_errors(vec![operation(
        OperationType::Subscription,
        Some("s"),
        Vec::new(),
        vec![field("newMessage", vec![leaf("body")]), leaf("other")],
    )]);
    assert_eq!(
        errors,
        [GqlError::SubscriptionHasMultipleRoots(Some(n("s")))]
    );
}

#[test]
fn it_rejects_subscriptions_with_two_root_fields_behind_a_spread() {
    // subscription s { ...F }
    // fragment F on Subscription { newMessage { body }  other }
    let errors = expect_errors(vec![
        operation(
            OperationType::Subscription,
            Some("s"),
            Vec::new(),
            vec![spread("F")],
        ),
        fragment(
            "F",
            "Subscription",
            vec![field("newMessage", vec![leaf("body")]), leaf("other")],
        ),
    ]);
    assert_eq!(
        errors,
        [GqlError::SubscriptionHasMultipleRoots(Some(n("s")))]
    );
}

#[test]
fn it_rejects_subscriptions_with_two_root_fields_behind_an_inline_fragment() {
    let errors = expect_errors(vec![operation(
        OperationType::Subscription,
        Some("s"),
        Vec::new(),
        vec![inline(
            Some("Subscription"),
            vec![field("newMessage", vec![leaf("body")]), leaf("other")],
        )],
    )]);
    assert_eq!(
        errors,
        [GqlError::SubscriptionHasMultipleRoots(Some(n("s")))]
    );
}

#[test]
fn it_accepts_single_root_subscriptions() {
    let result = validate(vec![
        operation(
            OperationType::Subscription,
            Some("direct"),
            Vec::new(),
            vec![field("newMessage", vec![leaf("body")])],
        ),
        operation(
            OperationType::Subscription,
            Some("throughSpread"),
            Vec::new(),
            vec![spread("NewMessage")],
        ),
        fragment(
            "NewMessage",
            "Subscription",
            vec![field("newMessage", vec![leaf("body"), leaf("sender")])],
        ),
    ]);
    assert!(result.is_ok(), "{result:?}");
}

#[test]
fn it_rejects_operations_without_a_root_type() {
    // The schema declares no Mutation type.
    let errors = expect_errors(vec![operation(
        OperationType::Mutation,
        Some("m"),
        Vec::new(),
        vec![leaf("anything")],
    )]);
    assert_eq!(errors, [GqlError::MissingDefinition(n("Mutation"))]);
}

#[test]
fn it_checks_directive_locations_on_operations() {
    // @priority is FIELD-only; @tag allows QUERY.
    let allowed = ExecutableDefinition::Operation(graphql_validator::Node::new(
        OperationDefinition {
            operation_type: OperationType::Query,
            name: Some(n("tagged")),
            variables: Vec::new(),
            directives: DirectiveList(vec![directive("tag", vec![])]),
            selection_set: vec![field("dog", vec![leaf("name")])],
        },
    ));
    assert!(validate(vec![allowed]).is_ok());

    let misplaced = ExecutableDefinition::Operation(graphql_validator::Node::new(
        OperationDefinition {
            operation_type: OperationType::Query,
            name: Some(n("prioritized")),
            variables: Vec::new(),
            directives: DirectiveList(vec![directive("priority", vec![("level", Value::Int(1))])]),
            selection_set: vec![field("dog", vec![leaf("name")])],
        },
    ));
    let errors = expect_errors(vec![misplaced]);
    assert!(
        matches!(
            &errors[..],
            [GqlError::InvalidLocation { name, .. }] if name == "priority"
        ),
        "{errors:?}"
    );
}

#[test]
fn it_rejects_undefined_directives() {
    let selection = field_with_directives("dog", vec![directive("skip", vec![])], vec![leaf("name")]);
    let errors = expect_errors(vec![query(Some("q"), vec![selection])]);
    assert_eq!(errors, [GqlError::MissingDefinition(n("skip"))]);
}

#[test]
fn it_rejects_repeating_a_non_repeatable_directive() {
    let selection = field_with_directives(
        "dog",
        vec![
            directive("priority", vec![("level", Value::Int(1))]),
            directive("priority", vec![("level", Value::Int(2))]),
        ],
        vec![leaf("name")],
    );
    let errors = expect_errors(vec![query(Some("q"), vec![selection])]);
    assert_eq!(errors, [GqlError::NameNotUnique(n("priority"))]);
}

#[test]
fn it_accepts_repeating_a_repeatable_directive() {
    let selection = field_with_directives(
        "dog",
        vec![
            directive("tag", vec![("name", Value::String("a".into()))]),
            directive("tag", vec![("name", Value::String("b".into()))]),
        ],
        vec![leaf("name")],
    );
    assert!(validate(vec![query(Some("q"), vec![selection])]).is_ok());
}
