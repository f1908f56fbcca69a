//! Behavior-driven tests for the ticker normalizer
//!
//! These tests describe what a dashboard user gets back when pasting a block
//! of tickers into the label generator.

use std::thread;

use comet_tests::{field_count, generate, options, Casing, FormatOptions};

// =============================================================================
// Canonical and display ids
// =============================================================================

#[test]
fn user_can_strip_exchange_and_quote_for_lowercase_labels() {
    // Given: A Binance spot pair and options asking for a bare lowercase label
    let opts = options(false, false, Casing::Lowercase);

    // When: The label is generated
    let generation = generate("BINANCE:BTCUSDT", &opts);

    // Then: The canonical id stays fully qualified, the label is just the base
    assert_eq!(generation.ticker_id_string, "BINANCE:BTCUSDT");
    assert_eq!(generation.name_id_string, "btc");
    assert!(generation.errors.is_empty());
}

#[test]
fn quote_is_kept_when_requested() {
    let generation = generate("ETHUSD", &options(false, true, Casing::Uppercase));

    assert_eq!(generation.ticker_id_string, "ETHUSD");
    assert_eq!(generation.name_id_string, "ETHUSD");
}

#[test]
fn perpetual_contract_round_trips_with_everything_included() {
    let generation = generate("BINANCE:BTCUSDTPERP", &options(true, true, Casing::Uppercase));

    assert_eq!(generation.ticker_id_string, "BINANCE:BTCUSDTPERP");
    assert_eq!(generation.name_id_string, "BINANCE:BTCUSDTPERP");
}

#[test]
fn ticker_id_ignores_format_options() {
    // Given: The same input rendered under every option combination
    let input = "bybit:SolUsdt.P, kraken:xbteur\nethbtc";
    let mut ticker_ids = Vec::new();

    for include_exchange in [true, false] {
        for include_quote in [true, false] {
            for casing in [Casing::Uppercase, Casing::Lowercase, Casing::AsEntered] {
                let opts = options(include_exchange, include_quote, casing);
                ticker_ids.push(generate(input, &opts).ticker_id_string);
            }
        }
    }

    // Then: The canonical string never changes and is always uppercase
    assert!(ticker_ids
        .iter()
        .all(|ids| ids == "BYBIT:SOLUSDT.P,KRAKEN:XBTEUR,ETHBTC"));
}

#[test]
fn as_entered_casing_preserves_what_the_user_typed() {
    let generation = generate(
        "Binance:BtcUsdt, ethUsd",
        &options(true, true, Casing::AsEntered),
    );

    assert_eq!(generation.ticker_id_string, "BINANCE:BTCUSDT,ETHUSD");
    assert_eq!(generation.name_id_string, "Binance:BtcUsdt,ethUsd");
}

// =============================================================================
// Suffix retention when the quote is dropped
// =============================================================================

#[test]
fn suffix_trailing_a_dropped_quote_is_dropped_too() {
    // Pinned policy: with the quote excluded, a suffix that follows it goes too
    let opts = options(false, false, Casing::Uppercase);

    let generation = generate("BINANCE:BTCUSDTPERP ETHUSD.P SOLBTC.S", &opts);

    assert_eq!(
        generation.ticker_id_string,
        "BINANCE:BTCUSDTPERP,ETHUSD.P,SOLBTC.S"
    );
    assert_eq!(generation.name_id_string, "BTC,ETH,SOL");
}

#[test]
fn suffix_on_a_quoteless_symbol_is_always_kept() {
    let opts = options(false, false, Casing::Uppercase);

    let generation = generate("BTCPERP, SPX.S", &opts);

    assert_eq!(generation.name_id_string, "BTCPERP,SPX.S");
}

// =============================================================================
// Batch shape
// =============================================================================

#[test]
fn output_stays_aligned_with_token_count() {
    let inputs = [
        "",
        "BTCUSDT",
        "BTCUSDT,,ETHUSD",
        "A:B:C\nUSDT  XYZ:\tSOLUSDC",
        " , \n kraken:XBTEUR , binance:ETHBTC.P ",
    ];

    for input in inputs {
        let generation = generate(input, &FormatOptions::default());
        let tokens = comet_core::tokenize(input).len();

        assert_eq!(generation.assets.len(), tokens, "input {input:?}");
        assert_eq!(field_count(&generation.ticker_id_string), tokens, "input {input:?}");
        assert_eq!(field_count(&generation.name_id_string), tokens, "input {input:?}");
    }
}

#[test]
fn empty_input_produces_empty_strings() {
    let generation = generate("", &FormatOptions::default());

    assert_eq!(generation.ticker_id_string, "");
    assert_eq!(generation.name_id_string, "");
    assert_eq!(generation.errors.len(), 0);
}

#[test]
fn generation_is_repeatable() {
    let opts = options(true, false, Casing::Lowercase);
    let input = "BINANCE:BTCUSDT ethusd A:B:C";

    assert_eq!(generate(input, &opts), generate(input, &opts));
}

#[test]
fn concurrent_callers_see_identical_results() {
    let input = "BINANCE:BTCUSDTPERP, ETHUSD, SOLUSDC.P";
    let expected = generate(input, &FormatOptions::default());

    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(move || generate(input, &FormatOptions::default())))
        .collect();

    for handle in handles {
        let generation = handle.join().expect("worker should not panic");
        assert_eq!(generation, expected);
    }
}

#[test]
fn generation_serializes_with_camel_case_fields() {
    let generation = generate("BINANCE:BTCUSDT", &options(false, true, Casing::Lowercase));

    let json = serde_json::to_value(&generation).expect("serializes");

    assert_eq!(json["tickerIdString"], "BINANCE:BTCUSDT");
    assert_eq!(json["nameIdString"], "btcusdt");
    assert_eq!(json["assets"][0]["exchange"], "BINANCE");
    assert_eq!(json["assets"][0]["quote"], "USDT");
    assert_eq!(json["options"]["casing"], "lowercase");
    assert_eq!(json["options"]["includeExchange"], false);
}
