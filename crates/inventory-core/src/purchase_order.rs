//! Purchase order entry.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};
use crate::ids::PurchaseOrderId;

/// Purchase order lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    /// Being edited.
    #[default]
    Draft,
    /// Sent to the vendor.
    Submitted,
    /// Withdrawn.
    Cancelled,
}

impl PurchaseOrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "draft",
            PurchaseOrderStatus::Submitted => "submitted",
            PurchaseOrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(PurchaseOrderStatus::Draft),
            "submitted" => Some(PurchaseOrderStatus::Submitted),
            "cancelled" => Some(PurchaseOrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for PurchaseOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A SKU and the quantity ordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrderLine {
    pub sku: String,
    pub quantity: u32,
}

/// A purchase order placed with a vendor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseOrder {
    pub id: PurchaseOrderId,
    pub vendor: String,
    pub order_date: NaiveDate,
    #[serde(default)]
    pub status: PurchaseOrderStatus,
    /// Lines in entry order, one per SKU.
    #[serde(default)]
    pub lines: Vec<PurchaseOrderLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl PurchaseOrder {
    /// Create a draft order.
    pub fn new(vendor: impl Into<String>, order_date: NaiveDate) -> Self {
        Self {
            id: PurchaseOrderId::generate(),
            vendor: vendor.into(),
            order_date,
            status: PurchaseOrderStatus::Draft,
            lines: Vec::new(),
            notes: None,
            submitted_at: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Add a quantity of a SKU, merging with an existing line.
    pub fn add_line(&mut self, sku: &str, quantity: u32) -> Result<()> {
        self.ensure_draft()?;
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }

        let sku = sku.trim();
        match self.lines.iter_mut().find(|l| l.sku == sku) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or(InventoryError::InvalidQuantity(quantity))?;
            }
            None => self.lines.push(PurchaseOrderLine {
                sku: sku.to_string(),
                quantity,
            }),
        }
        Ok(())
    }

    /// Remove the line for a SKU.
    pub fn remove_line(&mut self, sku: &str) -> Result<PurchaseOrderLine> {
        self.ensure_draft()?;
        let sku = sku.trim();
        let idx = self
            .lines
            .iter()
            .position(|l| l.sku == sku)
            .ok_or_else(|| InventoryError::LineNotFound(sku.to_string()))?;
        Ok(self.lines.remove(idx))
    }

    /// Total units across all lines.
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_draft(&self) -> bool {
        self.status == PurchaseOrderStatus::Draft
    }

    /// Check every line against the SKUs the catalog knows.
    pub fn validate(&self, known_skus: &HashSet<String>) -> Result<()> {
        match self.lines.iter().find(|l| !known_skus.contains(&l.sku)) {
            Some(line) => Err(InventoryError::UnknownSku(line.sku.clone())),
            None => Ok(()),
        }
    }

    /// Check that the order is a draft with lines the catalog knows.
    pub fn check_submittable(&self, known_skus: &HashSet<String>) -> Result<()> {
        self.ensure_draft()?;
        if self.lines.is_empty() {
            return Err(InventoryError::Validation(format!(
                "purchase order {} has no lines",
                self.id
            )));
        }
        self.validate(known_skus)
    }

    /// Validate and submit the order.
    pub fn submit(&mut self, known_skus: &HashSet<String>, at: DateTime<Utc>) -> Result<()> {
        self.check_submittable(known_skus)?;

        self.status = PurchaseOrderStatus::Submitted;
        self.submitted_at = Some(at);
        Ok(())
    }

    /// Cancel a draft or submitted order.
    pub fn cancel(&mut self) -> Result<()> {
        if self.status == PurchaseOrderStatus::Cancelled {
            return Err(InventoryError::Validation(format!(
                "purchase order {} is already cancelled",
                self.id
            )));
        }
        self.status = PurchaseOrderStatus::Cancelled;
        Ok(())
    }

    fn ensure_draft(&self) -> Result<()> {
        if self.is_draft() {
            Ok(())
        } else {
            Err(InventoryError::PurchaseOrderNotEditable {
                id: self.id.to_string(),
                status: self.status.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> PurchaseOrder {
        PurchaseOrder::new("Acme Textiles", NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    fn known() -> HashSet<String> {
        ["FLG_DSS_M", "RED_DSS_M"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_line_merges_quantities() {
        let mut po = order();
        po.add_line("FLG_DSS_M", 5).unwrap();
        po.add_line(" FLG_DSS_M ", 3).unwrap();
        po.add_line("RED_DSS_M", 2).unwrap();

        assert_eq!(po.line_count(), 2);
        assert_eq!(po.lines[0].quantity, 8);
        assert_eq!(po.total_units(), 10);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut po = order();
        assert_eq!(po.add_line("FLG_DSS_M", 0), Err(InventoryError::InvalidQuantity(0)));
    }

    #[test]
    fn test_remove_line() {
        let mut po = order();
        po.add_line("FLG_DSS_M", 5).unwrap();
        assert_eq!(po.remove_line("FLG_DSS_M").unwrap().quantity, 5);
        assert!(matches!(
            po.remove_line("FLG_DSS_M"),
            Err(InventoryError::LineNotFound(_))
        ));
    }

    #[test]
    fn test_submit_validates_skus() {
        let mut po = order();
        po.add_line("FLG_DSS_M", 1).unwrap();
        po.add_line("BLU_DSS_M", 1).unwrap();

        assert_eq!(
            po.submit(&known(), Utc::now()),
            Err(InventoryError::UnknownSku("BLU_DSS_M".into()))
        );
        assert!(po.is_draft());

        po.remove_line("BLU_DSS_M").unwrap();
        po.submit(&known(), Utc::now()).unwrap();
        assert_eq!(po.status, PurchaseOrderStatus::Submitted);
        assert!(po.submitted_at.is_some());
    }

    #[test]
    fn test_submitted_order_is_frozen() {
        let mut po = order();
        po.add_line("FLG_DSS_M", 1).unwrap();
        po.submit(&known(), Utc::now()).unwrap();

        assert!(matches!(
            po.add_line("RED_DSS_M", 1),
            Err(InventoryError::PurchaseOrderNotEditable { .. })
        ));
        po.cancel().unwrap();
        assert!(po.cancel().is_err());
    }

    #[test]
    fn test_status_checked_before_skus() {
        let mut po = order();
        po.add_line("FLG_DSS_M", 1).unwrap();
        po.submit(&known(), Utc::now()).unwrap();

        assert!(matches!(
            po.check_submittable(&HashSet::new()),
            Err(InventoryError::PurchaseOrderNotEditable { .. })
        ));

        let mut po = order();
        po.add_line("FLG_DSS_M", 1).unwrap();
        po.cancel().unwrap();
        assert!(matches!(
            po.check_submittable(&known()),
            Err(InventoryError::PurchaseOrderNotEditable { .. })
        ));
    }

    #[test]
    fn test_empty_order_cannot_be_submitted() {
        let mut po = order();
        assert!(matches!(
            po.submit(&known(), Utc::now()),
            Err(InventoryError::Validation(_))
        ));
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(
            PurchaseOrderStatus::from_str("Submitted"),
            Some(PurchaseOrderStatus::Submitted)
        );
        assert_eq!(PurchaseOrderStatus::Draft.to_string(), "draft");
        assert_eq!(PurchaseOrderStatus::from_str("lost"), None);
    }
}
