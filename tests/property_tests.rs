// tests/property_tests.rs

// Randomly generated well-typed closed programs: the checker accepts them and
// evaluation produces a value of the checked type (or an int division by zero).

use let_calc::{check, ArithOp, eval, render, Environment, Error, Expr, Type, TypeEnv};
use proptest::prelude::*;
use proptest::strategy::Union;

type Scope = Vec<(String, Type)>;

fn any_type() -> BoxedStrategy<Type> {
    prop_oneof![Just(Type::Int), Just(Type::Float), Just(Type::Bool)].boxed()
}

fn any_op() -> BoxedStrategy<ArithOp> {
    prop_oneof![
        Just(ArithOp::Add),
        Just(ArithOp::Sub),
        Just(ArithOp::Mul),
        Just(ArithOp::Div),
    ]
    .boxed()
}

fn leaf(ty: Type, scope: &Scope) -> BoxedStrategy<Expr> {
    let literal = match ty {
        Type::Int => (-1000i64..1000).prop_map(Expr::Int).boxed(),
        Type::Float => (-1000.0f64..1000.0).prop_map(Expr::Float).boxed(),
        Type::Bool => any::<bool>().prop_map(Expr::Bool).boxed(),
    };
    let vars: Vec<Expr> = scope
        .iter()
        .filter(|(_, bound)| *bound == ty)
        .map(|(name, _)| Expr::var(name.as_str()))
        .collect();
    if vars.is_empty() {
        literal
    } else {
        prop_oneof![literal, proptest::sample::select(vars)].boxed()
    }
}

// Builds only expressions whose type is `ty` under `scope`.
fn typed_expr(ty: Type, scope: Scope, depth: u32) -> BoxedStrategy<Expr> {
    if depth == 0 {
        return leaf(ty, &scope);
    }
    let sub = |t: Type| typed_expr(t, scope.clone(), depth - 1);

    let mut options = vec![leaf(ty, &scope)];
    if ty.is_numeric() {
        options.push(sub(ty).prop_map(Expr::neg).boxed());
        options.push(
            (sub(ty), sub(ty), any_op())
                .prop_map(|(lhs, rhs, op)| Expr::binary(op, lhs, rhs))
                .boxed(),
        );
    }
    options.push(
        (sub(Type::Bool), sub(ty), sub(ty))
            .prop_map(|(cond, then, else_)| Expr::if_then_else(cond, then, else_))
            .boxed(),
    );

    let outer = scope.clone();
    options.push(
        (any_type(), "[a-c]")
            .prop_flat_map(move |(bound_ty, name)| {
                let mut inner = outer.clone();
                inner.push((name.clone(), bound_ty));
                (
                    typed_expr(bound_ty, outer.clone(), depth - 1),
                    typed_expr(ty, inner, depth - 1),
                )
                    .prop_map(move |(bound, body)| Expr::let_in(name.clone(), bound, body))
            })
            .boxed(),
    );

    Union::new(options).boxed()
}

fn well_typed() -> impl Strategy<Value = (Type, Expr)> {
    any_type().prop_flat_map(|ty| (Just(ty), typed_expr(ty, Vec::new(), 3)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn eval_agrees_with_check((ty, expr) in well_typed()) {
        prop_assert_eq!(check(&expr, &TypeEnv::new()), Ok(ty));
        match eval(&expr, &Environment::new()) {
            Ok(value) => prop_assert_eq!(value.type_of(), ty),
            Err(Error::DivisionByZero) => {}
            Err(other) => prop_assert!(false, "unexpected failure {} for {}", other, render(&expr)),
        }
    }

    #[test]
    fn check_is_deterministic((_ty, expr) in well_typed()) {
        let env = TypeEnv::new();
        prop_assert_eq!(check(&expr, &env), check(&expr, &env));
    }

    #[test]
    fn render_is_stable_across_clones((_ty, expr) in well_typed()) {
        prop_assert_eq!(render(&expr), render(&expr.clone()));
    }
}
