use tests::models::Person;
use tinymap::{Mapper, TypeDescriptor};

fn assert_sync_send<T: Send + Sync>() {}

#[test]
fn mapper_is_sync_send() {
    assert_sync_send::<Mapper<Person>>();
    assert_sync_send::<TypeDescriptor<Person>>();
    assert_sync_send::<tinymap::Error>();
}

#[test]
fn cloned_mapper_shares_the_descriptor() {
    let mapper = Mapper::<Person>::new().unwrap();
    let cloned = mapper.clone();

    assert!(std::ptr::eq(mapper.descriptor(), cloned.descriptor()));
}
