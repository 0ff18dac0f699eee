use crypto_mention_counter::TextNormalizer;

#[cfg(test)]
mod strip_enabled_tests {
    use super::*;

    #[test]
    fn test_quote_lines_are_removed() {
        let normalizer = TextNormalizer::new(true);

        let cleaned = normalizer.normalize("> quoted $BTC\nreal text");
        assert_eq!(cleaned, "real text");
    }

    #[test]
    fn test_indented_quote_lines_are_removed() {
        let normalizer = TextNormalizer::new(true);

        let cleaned = normalizer.normalize("   > indented reply\nsurvivor");
        assert_eq!(cleaned, "survivor");
    }

    #[test]
    fn test_fenced_code_blocks_are_removed() {
        let normalizer = TextNormalizer::new(true);

        let cleaned = normalizer.normalize("before\n```\nBTC inside\n```\nafter");
        assert_eq!(cleaned, "before\n\nafter");
    }

    #[test]
    fn test_inline_code_spans_are_removed() {
        let normalizer = TextNormalizer::new(true);

        let cleaned = normalizer.normalize("pay `UNI gas` fees");
        assert_eq!(cleaned, "pay fees");
    }

    #[test]
    fn test_unpaired_fence_does_not_swallow_text() {
        let normalizer = TextNormalizer::new(true);

        let cleaned = normalizer.normalize("odd ``` fence");
        assert_eq!(cleaned, "odd ` fence");
    }

    #[test]
    fn test_quote_lines_are_judged_before_code_is_stripped() {
        let normalizer = TextNormalizer::new(true);

        // The line does not start with `>` until the code span is removed, so
        // it is not a quote line and must survive.
        let cleaned = normalizer.normalize("`x` > keep BTC");
        assert_eq!(cleaned, "> keep BTC");
    }
}

#[cfg(test)]
mod url_and_entity_tests {
    use super::*;

    #[test]
    fn test_http_and_https_urls_are_removed() {
        let normalizer = TextNormalizer::new(true);

        let cleaned = normalizer.normalize("read https://example.com/BTC and http://example.org too");
        assert_eq!(cleaned, "read and too");
    }

    #[test]
    fn test_www_fragments_are_removed() {
        let normalizer = TextNormalizer::new(true);

        let cleaned = normalizer.normalize("visit www.example.com now");
        assert_eq!(cleaned, "visit now");
    }

    #[test]
    fn test_url_with_leading_punctuation_keeps_the_prefix() {
        let normalizer = TextNormalizer::new(true);

        let cleaned = normalizer.normalize("(https://charts.example.com/ETH) gone");
        assert_eq!(cleaned, "( gone");
    }

    #[test]
    fn test_html_escaped_ampersands_are_decoded() {
        let normalizer = TextNormalizer::new(true);

        let cleaned = normalizer.normalize("BTC &amp; ETH");
        assert_eq!(cleaned, "BTC & ETH");
    }
}

#[cfg(test)]
mod strip_disabled_tests {
    use super::*;

    #[test]
    fn test_quotes_and_code_survive_when_stripping_is_disabled() {
        let normalizer = TextNormalizer::new(false);

        let cleaned = normalizer.normalize("> quote BTC\n`code ETH`");
        assert_eq!(cleaned, "> quote BTC\n`code ETH`");
    }

    #[test]
    fn test_urls_are_removed_even_when_stripping_is_disabled() {
        let normalizer = TextNormalizer::new(false);

        let cleaned = normalizer.normalize("see https://example.com/BTC anyway");
        assert_eq!(cleaned, "see anyway");
    }
}
