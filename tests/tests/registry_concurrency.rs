use log::{LevelFilter, Metadata, Record};
use std::{
    sync::{mpsc, Barrier, Mutex},
    thread,
    time::Duration,
};
use tests::row;
use tinymap::Mapper;

#[derive(Debug, Default, PartialEq, tinymap::Mapped)]
struct Address {
    #[column("street")]
    street: String,

    #[column("zip")]
    zip: i64,
}

#[derive(Debug, Default, PartialEq, tinymap::Mapped)]
struct Customer {
    #[column("id")]
    id: i64,

    #[embed]
    address: Address,
}

#[test]
fn concurrent_first_use_of_an_undescribed_type() {
    const THREADS: usize = 8;
    let barrier = Barrier::new(THREADS);

    let customers: Vec<Customer> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let barrier = &barrier;
                s.spawn(move || {
                    let row = row! { "id" => i as i64, "zip" => 1000_i64 + i as i64 };

                    barrier.wait();
                    Mapper::<Customer>::new().unwrap().map(&row).unwrap()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, customer) in customers.iter().enumerate() {
        assert_eq!(customer.id, i as i64);
        assert_eq!(customer.address.zip, 1000 + i as i64);
        assert_eq!(customer.address.street, "");
    }

    // Every caller ends up with the one cached descriptor.
    let a = tinymap::describe::<Customer>().unwrap();
    let b = tinymap::describe::<Customer>().unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[test]
fn one_mapper_shared_across_threads() {
    let mapper = Mapper::<Address>::new().unwrap();

    thread::scope(|s| {
        for i in 0..4_i64 {
            let mapper = &mapper;
            s.spawn(move || {
                let address = mapper
                    .map(&row! { "street" => "Main St", "zip" => i })
                    .unwrap();
                assert_eq!(address.zip, i);
            });
        }
    });
}

#[derive(Debug, Default, tinymap::Mapped)]
struct Invoice {
    #[column("invoice_no")]
    number: i64,
}

/// Logger that holds the thread caching `Invoice` inside `log::debug!` until
/// the test releases it.
struct CacheGate {
    entered: Mutex<Option<mpsc::Sender<()>>>,
    release: Mutex<Option<mpsc::Receiver<()>>>,
}

static GATE: CacheGate = CacheGate {
    entered: Mutex::new(None),
    release: Mutex::new(None),
};

impl log::Log for CacheGate {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if !record
            .args()
            .to_string()
            .starts_with("cached descriptor for `Invoice`")
        {
            return;
        }

        if let Some(entered) = self.entered.lock().unwrap().take() {
            let _ = entered.send(());
        }

        if let Some(release) = self.release.lock().unwrap().take() {
            let _ = release.recv_timeout(Duration::from_secs(10));
        }
    }

    fn flush(&self) {}
}

#[test]
fn cached_types_map_while_another_type_is_being_cached() {
    let _ = log::set_logger(&GATE);
    log::set_max_level(LevelFilter::Debug);

    // Describe `Customer` and its embedded `Address` up front.
    let mapper = Mapper::<Customer>::new().unwrap();

    let (entered_tx, entered_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    *GATE.entered.lock().unwrap() = Some(entered_tx);
    *GATE.release.lock().unwrap() = Some(release_rx);

    thread::scope(|s| {
        let caching = s.spawn(|| Mapper::<Invoice>::new().unwrap());
        entered_rx.recv_timeout(Duration::from_secs(10)).unwrap();

        let (done_tx, done_rx) = mpsc::channel();
        let mapper = &mapper;
        s.spawn(move || {
            let customer = mapper
                .map(&row! { "id" => 1_i64, "zip" => 2_i64 })
                .unwrap();
            let _ = done_tx.send(customer);
        });

        let mapped = done_rx.recv_timeout(Duration::from_secs(2));
        release_tx.send(()).unwrap();

        let invoice = caching.join().unwrap();
        assert_eq!(invoice.descriptor().model().name, "Invoice");

        let customer = mapped.expect("mapping a cached type waited on the registry");
        assert_eq!(customer.address.zip, 2);
    });
}
