// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Docdeck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Docdeck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Bullet, Feature, Panel, RegistryError, Section, SectionRegistry};
use crate::router::{ContentRouter, PanelSource};

use super::{Guide, GuideMeta, UnknownGuideError};

pub const BUILTIN_GUIDE_NAMES: &[&str] = &["utils", "brochure"];

pub fn builtin_guide(name: &str) -> Result<Guide, UnknownGuideError> {
    match name {
        "utils" => Ok(utils_guide()),
        "brochure" => Ok(brochure_guide()),
        _ => Err(UnknownGuideError { name: name.to_owned() }),
    }
}

// Each table row is (id, title, panel builder); order is navigation order.
type SectionRow = (&'static str, &'static str, fn() -> Panel);

const UTILS_SECTIONS: &[SectionRow] = &[
    ("introduction", "Introduction to AlgoKit Utils", utils_introduction),
    ("account", "Account Management", utils_account),
    ("transaction", "Transaction Operations", utils_transaction),
    ("asset", "Asset Operations", utils_asset),
    ("testing", "Testing Utilities", utils_testing),
];

const BROCHURE_SECTIONS: &[SectionRow] = &[
    ("connect-wallet", "Easily connecting Wallets", brochure_connect_wallet),
    ("transactions", "Creating Assets", brochure_transactions),
    ("querying-chain", "Querying the blockchain", brochure_querying_chain),
];

fn guide_from_rows(
    meta: GuideMeta,
    rows: &[SectionRow],
    default_section: &str,
) -> Result<Guide, RegistryError> {
    let mut sections = Vec::with_capacity(rows.len());
    let mut router = ContentRouter::new();
    for &(id, title, make) in rows {
        sections.push(Section::new(id, title));
        router.insert(id, PanelSource::Builtin(make));
    }
    let registry = SectionRegistry::new(sections)?;
    Ok(Guide::new(meta, registry, router, default_section))
}

// The tables are compile-time constants; a bad row is a programming error.
fn builtin_from_rows(meta: GuideMeta, rows: &[SectionRow], default_section: &str) -> Guide {
    match guide_from_rows(meta, rows, default_section) {
        Ok(guide) => guide,
        Err(err) => panic!("invalid built-in section table: {err}"),
    }
}

/// The AlgoKit Utils walkthrough: introduction, accounts, transactions, assets, testing.
pub fn utils_guide() -> Guide {
    builtin_from_rows(
        GuideMeta {
            title: "AlgoKit Utils Guide".to_owned(),
            subtitle: Some(
                "A comprehensive guide to using AlgoKit Utils for Algorand development".to_owned(),
            ),
            footer: Some("AlgoKit Utils Documentation - Built with Docdeck".to_owned()),
        },
        UTILS_SECTIONS,
        "introduction",
    )
}

/// A three-tab brochure of what a starter frontend can do.
pub fn brochure_guide() -> Guide {
    builtin_from_rows(
        GuideMeta {
            title: "AlgoKit Learn".to_owned(),
            subtitle: Some("What you can build with the starter frontend".to_owned()),
            footer: None,
        },
        BROCHURE_SECTIONS,
        "connect-wallet",
    )
}

fn utils_introduction() -> Panel {
    Panel::new("Introduction to AlgoKit Utils")
        .with_intro(
            "AlgoKit Utils is a versatile TypeScript library that simplifies Algorand blockchain \
             development. It provides a collection of utilities to make common Algorand operations \
             easier, faster, and more reliable.",
        )
        .with_feature(Feature::new("What is AlgoKit Utils?").paragraph(
            "AlgoKit Utils acts as a wrapper around the official Algorand JavaScript SDK (algosdk) \
             to provide higher-level abstractions and simplify common tasks. It is designed to be \
             the foundation for Algorand dApp development, offering utilities for account \
             management, transaction handling, smart contract interaction, and more.",
        ))
        .with_feature(Feature::new("Key Components").bullets([
            Bullet::labeled("Account Management", "Create, manage, and fund Algorand accounts"),
            Bullet::labeled(
                "Transaction Operations",
                "Send payments, asset transfers, and atomic transactions",
            ),
            Bullet::labeled(
                "Asset Operations",
                "Create, opt-in, and manage Algorand Standard Assets (ASAs)",
            ),
            Bullet::labeled(
                "Testing Utilities",
                "Tools to make testing Algorand applications easier",
            ),
        ]))
        .with_feature(
            Feature::new("Getting Started")
                .paragraph("Install AlgoKit Utils in your project:")
                .code_in("sh", "npm install @algorandfoundation/algokit-utils")
                .paragraph("Basic usage example:")
                .code_in(
                    "ts",
                    r#"import * as algokit from '@algorandfoundation/algokit-utils';
import algosdk from 'algosdk';

// Create an algod client
const algod: algosdk.Algodv2 = new algosdk.Algodv2('', 'https://node.testnet.algoexplorerapi.io', '');

// Create a new Algorand client from the algod client
const algorand: algokit.AlgorandClient = algokit.AlgorandClient.fromClients({ algod });"#,
                ),
        )
}

fn utils_account() -> Panel {
    Panel::new("Account Management")
        .with_intro(
            "Accounts are created and funded through the Algorand client's account manager.",
        )
        .with_feature(
            Feature::new("Creating Accounts")
                .paragraph("Generate random accounts or import existing ones:")
                .code_in(
                    "ts",
                    r#"// Generate a random account
const account: algosdk.Account = algorand.account.random();

// Create an account from a mnemonic
const mnemonicAccount: algosdk.Account = algorand.account.fromMnemonic("your mnemonic phrase here");"#,
                ),
        )
}

fn utils_transaction() -> Panel {
    Panel::new("Transaction Operations")
        .with_intro(
            "AlgoKit Utils provides powerful abstractions for creating, sending, and managing \
             Algorand transactions, making it easier to handle complex transaction scenarios.",
        )
        .with_feature(
            Feature::new("Basic Transactions")
                .paragraph("Create and send basic payment transactions:")
                .code_in(
                    "ts",
                    r#"// Simple payment transaction
await algorand.send.payment({
  sender: senderAccount,
  receiver: receiverAddress,
  amount: algokit.algos(1)
});

// Create a transaction without sending
const txn: algosdk.Transaction = await algorand.createTransaction.payment({
  sender: senderAccount.addr,
  receiver: receiverAddress,
  amount: algokit.algos(1)
});"#,
                ),
        )
        .with_feature(
            Feature::new("Transaction Groups")
                .paragraph(
                    "Create atomic transaction groups (up to 16 transactions that all succeed or \
                     fail together):",
                )
                .code_in(
                    "ts",
                    r#"// Create a transaction group
const result: algokit.SendTransactionGroupResults = await algorand.newGroup()
  .addPayment({
    sender: account,
    receiver: receiverAddress,
    amount: algokit.algos(1)
  })
  .addPayment({
    sender: account,
    receiver: otherAddress,
    amount: algokit.algos(0.5)
  })
  .send();"#,
                ),
        )
        .with_feature(
            Feature::new("Transaction Control")
                .paragraph("Finely control transaction parameters:")
                .code_in(
                    "ts",
                    r#"// Specify fees and other transaction parameters
await algorand.send.payment({
  sender: account,
  receiver: receiverAddress,
  amount: algokit.algos(1),
  maxFee: algokit.algos(0.002),  // Cap maximum fee
  staticFee: algokit.algos(0.001),  // Use a specific fee
  note: "Payment for services",
  lease: "unique-lease-id"  // Prevent duplicate transactions
})"#,
                ),
        )
        .with_feature(
            Feature::new("Transaction Simulation")
                .paragraph("Simulate transactions before sending to validate behavior:")
                .code_in(
                    "ts",
                    r#"// Get a group of transactions ready to simulate
const group = algorand.newGroup()
  .addPayment({ /* payment details */ })
  .addAppCall({ /* app call details */ });

// Simulate the transaction group to check for issues
const simulateResult: algosdk.modelsv2.SimulateResponse = await group.simulate();"#,
                ),
        )
        .with_feature(
            Feature::new("Waiting for Confirmation")
                .paragraph("Wait for transaction confirmation and get detailed results:")
                .code_in(
                    "ts",
                    r#"// Send and wait for confirmation
const result = await algorand.send.payment({
  sender: account,
  receiver: receiverAddress,
  amount: algokit.algos(1)
})

// Access confirmation details
console.log(`Transaction confirmed in round ${result.confirmation.confirmedRound}`)

// All confirmations in a group
const groupResult = await algorand.newGroup()
  .addPayment({ /* details */ })
  .addPayment({ /* details */ })
  .send()
console.log(groupResult.confirmations)
console.log(groupResult.txIds)"#,
                ),
        )
}

fn utils_asset() -> Panel {
    Panel::new("Asset Operations")
        .with_intro(
            "AlgoKit Utils provides simplified interfaces for working with Algorand Standard \
             Assets (ASAs), including creation, opt-in, transfers, and management.",
        )
        .with_feature(
            Feature::new("Creating Assets")
                .paragraph("Create a new Algorand Standard Asset (ASA):")
                .code_in(
                    "ts",
                    r#"// Create a new asset
const assetResult = await algorand.send.assetCreate({
  sender: creatorAccount,
  total: 1000000n, // Total supply
  decimals: 2, // Decimal precision
  defaultFrozen: false,
  assetName: "My Token",
  unitName: "TOKEN"
});

// Get the new asset ID
const assetId: bigint = assetResult.confirmation?.assetIndex || 0n;"#,
                ),
        )
        .with_feature(
            Feature::new("Asset Opt-In")
                .paragraph("Opt accounts in to receive specific assets:")
                .code_in(
                    "ts",
                    r#"// Opt an account into an asset
await algorand.send.assetOptIn({
  sender: account,
  assetId: tokenId
})

// Bulk opt-in to multiple assets at once
await algorand.asset.bulkOptIn(accountAddress, [asset1Id, asset2Id, asset3Id])"#,
                ),
        )
        .with_feature(
            Feature::new("Asset Transfers")
                .paragraph("Transfer assets between accounts:")
                .code_in(
                    "ts",
                    r#"// Transfer assets
await algorand.send.assetTransfer({
  sender: senderAccount,
  receiver: receiverAddress,
  assetId: tokenId,
  amount: 100n
})

// Clawback assets (if sender is the clawback address)
await algorand.send.assetTransfer({
  sender: clawbackAccount,
  receiver: receiverAddress,
  assetId: tokenId,
  amount: 50n,
  clawbackTarget: targetAddress
})"#,
                ),
        )
        .with_feature(
            Feature::new("Asset Opt-Out")
                .paragraph("Opt accounts out of assets:")
                .code_in(
                    "ts",
                    r#"// Opt out of an asset
await algorand.send.assetOptOut({
  sender: account,
  assetId: tokenId,
  creator: creatorAddress
})

// Bulk opt-out from multiple assets
await algorand.asset.bulkOptOut(accountAddress, [asset1Id, asset2Id, asset3Id])"#,
                ),
        )
        .with_feature(
            Feature::new("Asset Information")
                .paragraph("Retrieve asset information:")
                .code_in(
                    "ts",
                    r#"// Get asset information
const assetInfo: algosdk.modelsv2.Asset = await algorand.asset.get(assetId);

// Get information about an asset held by an account
const assetHolding = await algorand.asset.getAccountInformation(accountAddress, assetId);"#,
                ),
        )
}

fn utils_testing() -> Panel {
    Panel::new("Testing Utilities")
        .with_intro(
            "AlgoKit Utils includes robust testing tools that make it easier to write automated \
             tests for Algorand applications, with built-in fixtures and helpers for common \
             testing scenarios.",
        )
        .with_feature(
            Feature::new("Test Accounts")
                .paragraph("Create and fund test accounts easily:")
                .code_in(
                    "ts",
                    r#"// Create a test account with initial funding
const testAccount = await algokit.getTestAccount(
  {
    initialFunds: algokit.algos(10),
    suppressLog: true
  },
  algorand
);

// Now you can use this account in your tests
console.log(`Test account address: ${testAccount.addr}`);"#,
                ),
        )
}

fn brochure_connect_wallet() -> Panel {
    Panel::new("Easily connecting Wallets")
        .with_intro(
            "The starter frontend ships with a wallet connection flow so users can sign \
             transactions with the wallet they already use.",
        )
        .with_feature(
            Feature::new("Wallet provider")
                .paragraph("Wrap the application once and read the active account anywhere:")
                .code_in(
                    "ts",
                    r#"const { activeAddress, transactionSigner } = useWallet();"#,
                ),
        )
}

fn brochure_transactions() -> Panel {
    Panel::new("Creating Assets")
        .with_intro("Mint a new asset from the connected account in a single call.")
        .with_feature(
            Feature::new("Mint a token")
                .code_in(
                    "ts",
                    r#"const result = await algorand.send.assetCreate({
  sender: activeAddress,
  signer: transactionSigner,
  total: 1000n,
  assetName: "Demo Token",
  unitName: "DEMO"
});"#,
                ),
        )
}

fn brochure_querying_chain() -> Panel {
    Panel::new("Querying the blockchain")
        .with_intro("Read account balances and asset holdings straight from algod.")
        .with_feature(
            Feature::new("Account information")
                .code_in(
                    "ts",
                    r#"const info = await algorand.account.getInformation(activeAddress);
console.log(info.balance.algos);"#,
                ),
        )
        .with_feature(Feature::new("What you can read").bullets([
            Bullet::plain("Balances and minimum balance requirements"),
            Bullet::plain("Assets held and created by an account"),
            Bullet::plain("Application state and boxes"),
        ]))
}

#[cfg(test)]
mod tests {
    use super::{guide_from_rows, utils_introduction, SectionRow, BROCHURE_SECTIONS, UTILS_SECTIONS};
    use crate::guide::GuideMeta;
    use crate::model::RegistryError;

    #[test]
    fn builtin_tables_build_full_registries() {
        for rows in [UTILS_SECTIONS, BROCHURE_SECTIONS] {
            let guide = guide_from_rows(GuideMeta::default(), rows, rows[0].0).expect("table");
            assert_eq!(guide.registry().len(), rows.len());
        }
    }

    #[test]
    fn duplicate_row_ids_are_reported() {
        let rows: &[SectionRow] = &[
            ("intro", "Introduction", utils_introduction),
            ("intro", "Introduction again", utils_introduction),
        ];
        match guide_from_rows(GuideMeta::default(), rows, "intro") {
            Err(RegistryError::DuplicateId { id }) => assert_eq!(id, "intro"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("duplicate ids should be rejected"),
        }
    }
}
