use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use shopforge_store::MemoryStore;

/// Write one CSV per table into `run_dir` with deterministic column and row
/// ordering. Returns the total bytes written.
pub fn export_store_csv(run_dir: &Path, store: &MemoryStore) -> Result<u64, csv::Error> {
    let mut bytes = 0;
    bytes += write_customers(&run_dir.join("customers.csv"), store)?;
    bytes += write_categories(&run_dir.join("categories.csv"), store)?;
    bytes += write_products(&run_dir.join("products.csv"), store)?;
    bytes += write_orders(&run_dir.join("orders.csv"), store)?;
    bytes += write_order_details(&run_dir.join("order_details.csv"), store)?;
    Ok(bytes)
}

fn write_customers(path: &Path, store: &MemoryStore) -> Result<u64, csv::Error> {
    let mut writer = open_writer(path)?;
    writer.write_record(["id", "email", "password_hash", "first_name", "last_name"])?;
    for customer in store.customers() {
        writer.write_record([
            customer.id.to_string(),
            customer.email.clone(),
            customer.password_hash.clone(),
            customer.first_name.clone(),
            customer.last_name.clone(),
        ])?;
    }
    finish(writer)
}

fn write_categories(path: &Path, store: &MemoryStore) -> Result<u64, csv::Error> {
    let mut writer = open_writer(path)?;
    writer.write_record(["id", "name"])?;
    for category in store.categories() {
        writer.write_record([category.id.to_string(), category.name.clone()])?;
    }
    finish(writer)
}

fn write_products(path: &Path, store: &MemoryStore) -> Result<u64, csv::Error> {
    let mut writer = open_writer(path)?;
    writer.write_record([
        "id",
        "category_id",
        "name",
        "description",
        "price",
        "stock_quantity",
    ])?;
    for product in store.products() {
        writer.write_record([
            product.id.to_string(),
            product.category_id.to_string(),
            product.name.clone(),
            product.description.clone().unwrap_or_default(),
            product.price.to_string(),
            product.stock_quantity.to_string(),
        ])?;
    }
    finish(writer)
}

fn write_orders(path: &Path, store: &MemoryStore) -> Result<u64, csv::Error> {
    let mut writer = open_writer(path)?;
    writer.write_record([
        "id",
        "customer_id",
        "ordered_at",
        "customer_name",
        "total_amount",
    ])?;
    for order in store.orders() {
        writer.write_record([
            order.id.to_string(),
            order.customer_id.to_string(),
            order.ordered_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            order.customer_name.clone(),
            order.total_amount.to_string(),
        ])?;
    }
    finish(writer)
}

fn write_order_details(path: &Path, store: &MemoryStore) -> Result<u64, csv::Error> {
    let mut writer = open_writer(path)?;
    writer.write_record(["id", "order_id", "product_id", "unit_price", "quantity"])?;
    for detail in store.order_details() {
        writer.write_record([
            detail.id.to_string(),
            detail.order_id.to_string(),
            detail.product_id.to_string(),
            detail.unit_price.to_string(),
            detail.quantity.to_string(),
        ])?;
    }
    finish(writer)
}

fn open_writer(path: &Path) -> Result<csv::Writer<CountingWriter<BufWriter<File>>>, csv::Error> {
    let file = File::create(path).map_err(csv::Error::from)?;
    let counting = CountingWriter::new(BufWriter::new(file));
    Ok(csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting))
}

fn finish(mut writer: csv::Writer<CountingWriter<BufWriter<File>>>) -> Result<u64, csv::Error> {
    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
