//! The accounts panel.

use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    html::FORM_TEXT_INPUT_STYLE,
    panel::{CardParts, EntityId, PanelKind, Resource, card_view, create_form_view},
    user::UserId,
};

/// The ID the backend assigns to an account.
pub type AccountId = EntityId;

/// An account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    /// Assigned by the backend, never by the console.
    pub id: AccountId,
    /// The account's display name.
    pub acc_name: String,
    /// The amount of money in the account.
    pub balance: f64,
    /// The ID of the user that owns the account.
    pub user_id: UserId,
}

/// The fields of the create and edit account forms, as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountForm {
    /// The account's display name.
    pub acc_name: String,
    /// The balance, which must parse as a decimal number.
    pub balance: String,
    /// The owner's ID, which must parse as an integer.
    pub user_id: String,
}

/// The JSON body sent to the backend to create or update an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountPayload {
    /// The account's display name.
    pub acc_name: String,
    /// The amount of money in the account.
    pub balance: f64,
    /// The ID of the user that owns the account.
    pub user_id: UserId,
}

impl TryFrom<AccountForm> for AccountPayload {
    type Error = Error;

    fn try_from(form: AccountForm) -> Result<Self, Self::Error> {
        let balance = form
            .balance
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|balance| balance.is_finite())
            .ok_or_else(|| Error::InvalidForm("Balance must be a number".to_owned()))?;

        let user_id = form
            .user_id
            .trim()
            .parse::<UserId>()
            .map_err(|_| Error::InvalidForm("Owner ID must be a whole number".to_owned()))?;

        Ok(Self {
            acc_name: form.acc_name,
            balance,
            user_id,
        })
    }
}

/// Manages the backend's accounts.
#[derive(Debug, Clone, Copy)]
pub struct AccountPanel;

impl Resource for AccountPanel {
    type Entity = Account;
    type Form = AccountForm;
    type Payload = AccountPayload;

    const KIND: PanelKind = PanelKind::Accounts;
    const RELOAD_AFTER_CHANGE: &'static [PanelKind] = &[PanelKind::Accounts];
    const RELOAD_AFTER_DELETE: &'static [PanelKind] = &[PanelKind::Accounts];
    const DELETE_ALL_CONFIRMATION: &'static str = "Are you sure you want to delete all accounts?";

    fn payload(form: AccountForm) -> Result<AccountPayload, Error> {
        AccountPayload::try_from(form)
    }

    fn delete_confirmation(id: AccountId) -> String {
        format!("Delete account {id}?")
    }

    fn card(account: &Account) -> Markup {
        card_view(CardParts {
            kind: Self::KIND,
            id: account.id,
            label: "ACCOUNT",
            details: html!(
                p { strong { "Name:" } " " span class="acc-name" { (account.acc_name) } }
                p { strong { "Balance:" } " " span class="acc-balance" { "$" (format_balance(account.balance)) } }
                p { strong { "Owner ID:" } " " span class="acc-owner" { (account.user_id) } }
            ),
            edit_heading: None,
            edit_fields: html!(
                input
                    type="text"
                    name="acc_name"
                    class=(FORM_TEXT_INPUT_STYLE)
                    value=(account.acc_name)
                    placeholder="Acc Name"
                    required;

                input
                    type="number"
                    name="balance"
                    class=(FORM_TEXT_INPUT_STYLE)
                    value=(format_balance(account.balance))
                    step="any"
                    placeholder="Balance"
                    required;

                input type="hidden" name="user_id" value=(account.user_id) required;
            ),
            delete_confirmation: Self::delete_confirmation(account.id),
        })
    }

    fn create_form() -> Markup {
        create_form_view(
            Self::KIND,
            "New Account",
            html!(
                input
                    type="text"
                    name="acc_name"
                    class=(FORM_TEXT_INPUT_STYLE)
                    placeholder="Acc Name"
                    required;

                input
                    type="number"
                    name="balance"
                    class=(FORM_TEXT_INPUT_STYLE)
                    step="0.01"
                    placeholder="Balance"
                    required;

                input
                    type="number"
                    name="user_id"
                    class=(FORM_TEXT_INPUT_STYLE)
                    step="1"
                    placeholder="Owner ID"
                    required;
            ),
        )
    }
}

/// Format `balance` the shortest way that reads back as the same number,
/// e.g. "100.5" or "100".
///
/// Magnitudes below 1e-6 or from 1e21 up use exponent notation with an
/// explicit sign, e.g. "1e-7" and "1e+21", as browsers print numbers.
fn format_balance(balance: f64) -> String {
    if balance == 0.0 {
        // Includes -0.
        return "0".to_owned();
    }

    if (1e-6..1e21).contains(&balance.abs()) {
        return balance.to_string();
    }

    let scientific = format!("{balance:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}
