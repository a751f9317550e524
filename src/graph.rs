//! Mermaid flowchart export of transition tables.

use crate::core::Label;
use crate::table::TransitionTable;

/// Render `table` as a Mermaid top-down flowchart.
///
/// One line per rule, in declaration order, so the output is stable and
/// diffable. When `transform` is given it is applied separately to the
/// source, event and destination names, e.g. to map them to display names.
///
/// # Example
///
/// ```rust
/// use fsm_table::graph::mermaid_top_down;
/// use fsm_table::TransitionTable;
///
/// let table = TransitionTable::new("StateA")
///     .declare("EventX", "StateA", "StateB")
///     .declare("EventY", "StateB", "StateC");
///
/// assert_eq!(
///     mermaid_top_down(&table, None),
///     "\ngraph TD\n  StateA --> |EventX| StateB\n  StateB --> |EventY| StateC\n"
/// );
/// ```
pub fn mermaid_top_down<E: Label, S: Label>(
    table: &TransitionTable<E, S>,
    transform: Option<&dyn Fn(&str) -> String>,
) -> String {
    let mut buf = String::from("\ngraph TD\n");

    for (event, src, dest) in table.rules() {
        let (src, event, dest) = match transform {
            Some(transform) => (
                transform(src.name()),
                transform(event.name()),
                transform(dest.name()),
            ),
            None => (
                src.name().to_string(),
                event.name().to_string(),
                dest.name().to_string(),
            ),
        };
        buf.push_str(&format!("  {src} --> |{event}| {dest}\n"));
    }
    buf
}

impl<E: Label, S: Label> TransitionTable<E, S> {
    /// Mermaid top-down flowchart of this table.
    pub fn mermaid(&self) -> String {
        mermaid_top_down(self, None)
    }

    /// Mermaid top-down flowchart with every name passed through `transform`.
    pub fn mermaid_with<F>(&self, transform: F) -> String
    where
        F: Fn(&str) -> String,
    {
        let transform: &dyn Fn(&str) -> String = &transform;
        mermaid_top_down(self, Some(transform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders() -> TransitionTable<&'static str, &'static str> {
        TransitionTable::new("AwaitingPayment")
            .declare("Order.Placed", "AwaitingPayment", "Confirmed")
            .declare("Order.Shipped", "Confirmed", "Shipped")
            .declare("Order.Delivered", "Shipped", "Delivered")
            .declare("Order.Cancelled", "Confirmed", "Cancelled")
            .declare("Order.ReturnRequested", "Shipped", "ReturnInProgress")
            .declare("Order.CargoReturned", "ReturnInProgress", "Returned")
            .declare("Order.RefundRequested", "ReturnInProgress", "RefundInProgress")
            .declare("Order.Refunded", "RefundInProgress", "Refunded")
            .declare("Order.Refunded", "Returned", "RefundInProgress")
            .declare("Order.ReturnRequested", "Delivered", "ReturnInProgress")
    }

    #[test]
    fn mermaid_lists_rules_in_declaration_order() {
        let expected = "
graph TD
  AwaitingPayment --> |Order.Placed| Confirmed
  Confirmed --> |Order.Shipped| Shipped
  Shipped --> |Order.Delivered| Delivered
  Confirmed --> |Order.Cancelled| Cancelled
  Shipped --> |Order.ReturnRequested| ReturnInProgress
  ReturnInProgress --> |Order.CargoReturned| Returned
  ReturnInProgress --> |Order.RefundRequested| RefundInProgress
  RefundInProgress --> |Order.Refunded| Refunded
  Returned --> |Order.Refunded| RefundInProgress
  Delivered --> |Order.ReturnRequested| ReturnInProgress
";

        assert_eq!(orders().mermaid(), expected);
    }

    #[test]
    fn mermaid_is_stable_across_calls() {
        let table = orders();
        assert_eq!(table.mermaid(), table.mermaid());
    }

    #[test]
    fn transform_applies_to_each_name() {
        let table = TransitionTable::new("Confirmed").declare(
            "Order.Shipped",
            "Confirmed",
            "Shipped",
        );

        let graph = table.mermaid_with(|text| text.trim_start_matches("Order.").to_uppercase());

        assert_eq!(graph, "\ngraph TD\n  CONFIRMED --> |SHIPPED| SHIPPED\n");
    }

    #[test]
    fn empty_table_renders_header_only() {
        let table: TransitionTable<&str, &str> = TransitionTable::new("Idle");
        assert_eq!(table.mermaid(), "\ngraph TD\n");
    }

    #[test]
    fn machine_exports_its_table() {
        let table = orders();
        let machine = table.machine().derive_at("Shipped");

        assert_eq!(machine.export_graph(), table.mermaid());
        assert_eq!(
            machine.export_graph_with(|text| text.to_lowercase()),
            table.mermaid_with(|text| text.to_lowercase())
        );
    }
}
