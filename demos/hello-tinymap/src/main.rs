use rusqlite::Connection;
use tinymap::Mapper;
use tinymap_driver_sqlite::query_map;

#[derive(Debug, Default, tinymap::Mapped)]
struct FullName {
    #[column("first_name")]
    first: String,

    #[column("last_name")]
    last: String,
}

#[derive(Debug, Default, tinymap::Mapped)]
struct Student {
    #[column("id")]
    id: String,

    #[column("email")]
    email: Option<String>,

    #[column("year")]
    year: i64,

    #[embed]
    name: FullName,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let conn = Connection::open_in_memory()?;
    conn.execute_batch(
        "CREATE TABLE student (
            id TEXT PRIMARY KEY,
            email TEXT,
            year INTEGER NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        );",
    )?;

    let mut insert = conn.prepare(
        "INSERT INTO student (id, email, year, first_name, last_name) VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    insert.execute((
        "e2c7de0e-8ae8-4529-a036-6b7989e81616",
        Some("john@example.com"),
        2,
        "John",
        "Doe",
    ))?;
    insert.execute((
        "0f6a2f1c-3b8e-4d6e-9f3c-1f2d0c9a7b55",
        None::<&str>,
        1,
        "Nancy",
        "Huerta",
    ))?;
    log::info!("inserted demo students");

    let mapper = Mapper::<Student>::new()?;

    println!("==> SELECT * FROM student WHERE id = ?");
    let mut stmt = conn.prepare("SELECT * FROM student WHERE id = ?1")?;
    for student in query_map(&mut stmt, ["e2c7de0e-8ae8-4529-a036-6b7989e81616"], &mapper)? {
        println!("{student:#?}");
    }

    // Columns that are not selected keep their default value, and `name` is
    // only built because `last_name` is selected.
    println!("==> SELECT id, last_name FROM student");
    let mut stmt = conn.prepare("SELECT id, last_name FROM student ORDER BY year")?;
    for student in query_map(&mut stmt, [], &mapper)? {
        println!("{student:#?}");
    }

    println!("==> SELECT id, year FROM student (all columns required)");
    let strict = Mapper::<Student>::builder()
        .require_all_columns(true)
        .build()?;
    let mut stmt = conn.prepare("SELECT id, year FROM student")?;
    match query_map(&mut stmt, [], &strict) {
        Ok(students) => println!("{students:#?}"),
        Err(err) => println!("error: {err}"),
    }

    Ok(())
}
