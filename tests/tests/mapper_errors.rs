use tests::{init_logging, models::*, row};
use tinymap::{Fields, Mapped, Mapper, Result, Type};

#[test]
fn empty_column_name_fails_every_time() {
    init_logging();

    #[derive(Debug, Default)]
    struct Blank {
        id: i64,
    }

    impl Mapped for Blank {
        fn name() -> &'static str {
            "Blank"
        }

        fn declare(fields: &mut Fields<Self>) {
            fields
                .field("id")
                .column("")
                .set(|this: &mut Self, id: i64| this.id = id);
        }

        fn instantiate() -> Result<Self> {
            Ok(Blank::default())
        }
    }

    for _ in 0..2 {
        let err = Mapper::<Blank>::new().unwrap_err();
        assert!(err.is_invalid_configuration());
        assert_eq!(
            err.to_string(),
            "invalid configuration for `Blank`: field `id` has an empty column name"
        );
    }
}

#[test]
fn column_and_embed_on_one_field() {
    #[derive(Debug, Default)]
    struct Both {
        full_name: FullName,
    }

    impl Mapped for Both {
        fn name() -> &'static str {
            "Both"
        }

        fn declare(fields: &mut Fields<Self>) {
            fields
                .field("full_name")
                .column("full_name")
                .embed(|this: &mut Self, full_name: FullName| this.full_name = full_name);
        }
    }

    let err = Mapper::<Both>::new().unwrap_err();
    assert!(err.is_invalid_configuration());
    assert_eq!(
        err.to_string(),
        "invalid configuration for `Both`: field `full_name` is marked both as a column and as an embed"
    );
}

#[test]
fn column_without_value_type() {
    struct Untyped;

    impl Mapped for Untyped {
        fn name() -> &'static str {
            "Untyped"
        }

        fn declare(fields: &mut Fields<Self>) {
            fields.field("id").column("id");
        }
    }

    let err = Mapper::<Untyped>::new().unwrap_err();
    assert!(err.is_invalid_configuration());
    assert_eq!(
        err.to_string(),
        "invalid configuration for `Untyped`: column field `id` declares no value type"
    );
}

#[test]
fn embedding_three_levels_deep() {
    #[derive(Debug, Default, tinymap::Mapped)]
    struct Leaf {
        #[column("value")]
        value: String,
    }

    #[derive(Debug, Default, tinymap::Mapped)]
    struct Middle {
        #[embed]
        leaf: Leaf,
    }

    #[derive(Debug, Default, tinymap::Mapped)]
    struct Top {
        #[embed]
        middle: Middle,
    }

    #[derive(Debug, Default, tinymap::Mapped)]
    struct Root {
        #[embed]
        top: Top,
    }

    // Two levels below the root are allowed.
    let top = Mapper::<Top>::new().unwrap();
    let mapped = top.map(&row! { "value" => "deep" }).unwrap();
    assert_eq!(mapped.middle.leaf.value, "deep");

    let err = Mapper::<Root>::new().unwrap_err();
    assert!(err.is_invalid_configuration());
    assert_eq!(
        err.to_string(),
        "invalid configuration for `Root`: field `top` embeds `Top`, nesting 3 levels deep (maximum: 2)"
    );
}

#[test]
fn type_that_embeds_itself() {
    #[derive(Debug, Default)]
    struct Node {
        value: i64,
        child: Option<Box<Node>>,
    }

    impl Mapped for Node {
        fn name() -> &'static str {
            "Node"
        }

        fn declare(fields: &mut Fields<Self>) {
            fields
                .field("value")
                .column("value")
                .set(|this: &mut Self, value: i64| this.value = value);
            fields
                .field("child")
                .embed(|this: &mut Self, child: Node| this.child = Some(Box::new(child)));
        }

        fn instantiate() -> Result<Self> {
            Ok(Node::default())
        }
    }

    let err = Mapper::<Node>::new().unwrap_err();
    assert!(err.is_invalid_configuration());
    assert_eq!(
        err.to_string(),
        "invalid configuration for `Node`: `Node` embeds itself"
    );

    // The failure is not cached, and leaves nothing behind on this thread.
    assert!(Mapper::<Node>::new().unwrap_err().is_invalid_configuration());
    assert!(Mapper::<Person>::new().is_ok());
}

#[test]
fn type_without_parameterless_initializer() {
    #[derive(Debug)]
    struct Account {
        id: i64,
    }

    impl Account {
        fn set_id(&mut self, id: i64) {
            self.id = id;
        }
    }

    impl Mapped for Account {
        fn name() -> &'static str {
            "Account"
        }

        fn declare(fields: &mut Fields<Self>) {
            fields.field("id").column("id").set(Account::set_id);
        }
    }

    let mapper = Mapper::<Account>::new().unwrap();
    let err = mapper.map(&row! { "id" => 1_i64 }).unwrap_err();
    assert!(err.is_construction());
    assert_eq!(
        err.to_string(),
        "cannot construct `Account`: no parameterless initializer"
    );
}

#[test]
fn column_field_without_mutator() {
    #[derive(Debug, Default)]
    struct ReadOnly {
        id: i64,
    }

    impl Mapped for ReadOnly {
        fn name() -> &'static str {
            "ReadOnly"
        }

        fn declare(fields: &mut Fields<Self>) {
            fields.field("id").column("id").ty(Type::I64);
        }

        fn instantiate() -> Result<Self> {
            Ok(ReadOnly::default())
        }
    }

    let mapper = Mapper::<ReadOnly>::new().unwrap();

    // Absent columns never reach the mutator.
    let read_only = mapper.map(&row! {}).unwrap();
    assert_eq!(read_only.id, 0);

    let err = mapper.map(&row! { "id" => 1_i64 }).unwrap_err();
    assert!(err.is_mutator_not_found());
    assert_eq!(
        err.to_string(),
        "no mutator for `ReadOnly.id` accepting I64"
    );
}

#[test]
fn mutator_parameter_rejects_the_cast_value() {
    #[derive(Debug, Default)]
    struct Narrow {
        id: i32,
    }

    impl Mapped for Narrow {
        fn name() -> &'static str {
            "Narrow"
        }

        fn declare(fields: &mut Fields<Self>) {
            fields
                .field("id")
                .column("id")
                .ty(Type::I64)
                .set(|this: &mut Self, id: i32| this.id = id);
        }

        fn instantiate() -> Result<Self> {
            Ok(Narrow::default())
        }
    }

    let err = Mapper::<Narrow>::new()
        .unwrap()
        .map(&row! { "id" => 1_i64 })
        .unwrap_err();
    assert!(err.is_mutator_not_found());
    assert_eq!(err.to_string(), "no mutator for `Narrow.id` accepting I64");
}

#[test]
fn value_of_the_wrong_type() {
    let mapper = Mapper::<Person>::new().unwrap();

    let err = mapper.map(&row! { "id" => "seven" }).unwrap_err();
    assert!(err.is_invalid_cast());
    assert_eq!(
        err.to_string(),
        "cannot cast column `id`: expected I64, found String"
    );

    // No widening from a smaller integer either.
    let err = mapper.map(&row! { "id" => 7_i32 }).unwrap_err();
    assert!(err.is_invalid_cast());
}

#[test]
fn null_into_required_field() {
    let err = Mapper::<Person>::new()
        .unwrap()
        .map(&row! { "name" => Option::<String>::None })
        .unwrap_err();

    assert!(err.is_invalid_cast());
    assert_eq!(
        err.to_string(),
        "cannot cast column `name`: expected String, found Null"
    );
}

#[test]
fn cast_failure_inside_embed() {
    let err = Mapper::<Person>::new()
        .unwrap()
        .map(&row! { "id" => 1_i64, "first" => 5_i64 })
        .unwrap_err();

    assert!(err.is_invalid_cast());
    assert_eq!(
        err.to_string(),
        "mapping `Person.full_name`: cannot cast column `first`: expected String, found I64"
    );
}

#[test]
fn failure_two_embeds_down_names_each_level() {
    let err = Mapper::<Student>::new()
        .unwrap()
        .map(&row! { "last" => Option::<String>::None })
        .unwrap_err();

    assert!(err.is_invalid_cast());
    assert_eq!(
        err.to_string(),
        "mapping `Student.person`: mapping `Person.full_name`: \
         cannot cast column `last`: expected String, found Null"
    );
}

#[test]
fn nullable_column_with_non_nullable_mutator() {
    #[derive(Debug, Default)]
    struct Score {
        points: i64,
    }

    impl Mapped for Score {
        fn name() -> &'static str {
            "Score"
        }

        fn declare(fields: &mut Fields<Self>) {
            fields
                .field("points")
                .column("points")
                .nullable(true)
                .set(|this: &mut Self, points: i64| this.points = points);
        }

        fn instantiate() -> Result<Self> {
            Ok(Score::default())
        }
    }

    let err = Mapper::<Score>::new().unwrap_err();
    assert!(err.is_invalid_configuration());
    assert_eq!(
        err.to_string(),
        "invalid configuration for `Score`: field `points` is nullable but its mutator does not accept null"
    );
}

#[test]
fn nullable_column_with_option_mutator() {
    #[derive(Debug, Default)]
    struct Bonus {
        points: Option<i64>,
    }

    impl Mapped for Bonus {
        fn declare(fields: &mut Fields<Self>) {
            fields
                .field("points")
                .column("points")
                .set(|this: &mut Self, points: Option<i64>| this.points = points)
                .nullable(true);
        }

        fn instantiate() -> Result<Self> {
            Ok(Bonus::default())
        }
    }

    let bonus = Mapper::<Bonus>::new()
        .unwrap()
        .map(&row! { "points" => Option::<i64>::None })
        .unwrap();
    assert_eq!(bonus.points, None);
}
