// techcommerce-core/src/infrastructure/alert.rs
//
// Console implementation of the alert port. Prints the framed banner the
// operations team greps for in the pipeline logs.

use crate::ports::alert::AlertSink;

pub struct ConsoleAlert;

impl AlertSink for ConsoleAlert {
    fn notify(&self, suite_name: &str, failed_expectations: usize) {
        let frame = "=".repeat(50);
        let message = format!(
            "🚨 ALERTA: Validação para '{}' falhou! {} expectativas não foram atendidas.",
            suite_name, failed_expectations
        );
        eprintln!("\n{}\nSIMULAÇÃO DE ALERTA\n{}\n{}\n{}\n", frame, frame, message, frame);
    }
}
