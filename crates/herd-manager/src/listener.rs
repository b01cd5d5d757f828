//! Listener that writes every model change to the log.
use pasture_core::{ChangeEvent, Listener, ListenerError, Value};

pub struct LoggingListener {
    label: &'static str,
}

impl LoggingListener {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl Listener for LoggingListener {
    fn on_change(&self, event: &ChangeEvent) -> Result<(), ListenerError> {
        tracing::info!(
            listener = self.label,
            source = %event.source,
            key = %event.key,
            old = %describe(event.old.as_ref()),
            new = %describe(event.new.as_ref()),
            "model changed"
        );
        Ok(())
    }
}

fn describe(value: Option<&Value>) -> String {
    match value {
        None => "-".to_owned(),
        Some(Value::Dimensions(size)) => format!("{}x{}", size.columns, size.rows),
        Some(Value::Animation(mode)) => mode.to_string(),
        Some(Value::Element(element)) => {
            format!("{}{} at {}", element.kind, element.id, element.position)
        }
        Some(Value::Cattle(cattle)) => format!(
            "{} at {} facing {} ({}, milk {})",
            cattle.name,
            cattle.element.position,
            cattle.direction,
            cattle.status,
            cattle.milk
        ),
    }
}
