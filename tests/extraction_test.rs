use article_density::{extract, extract_with_options, Error, Options};

const ARTICLE_PAGE: &str = r#"<html>
<head>
  <title>City Council Approves Budget - Example Herald</title>
  <meta name="description" content="The council passed the annual budget after a long debate.">
</head>
<body>
  <div id="header"><a href="/">Home</a><a href="/politics">Politics</a><a href="/sports">Sports</a><a href="/contact">Contact</a></div>
  <div id="story">
    <h1>City Council Approves Budget</h1>
    <p>The city council voted late on Tuesday to approve next year's budget, ending a debate that had stretched across three sessions and tested the patience of everyone involved.</p>
    <p>Supporters argued the plan protects essential services, while critics said it leans too heavily on one-time revenue. In the end, the vote was not close: nine members in favor, two against.</p>
    <p>The mayor, who had threatened a veto earlier in the month, said she was satisfied with the final amendments and would sign the measure before the weekend.</p>
    <a href="/prev">Previous: Transit plan stalls</a>
    <a href="/next">Next: School board race heats up</a>
    <p>Reporting contributed by the city desk.</p>
  </div>
  <div id="footer"><a href="/about">About us</a><a href="/terms">Terms</a><a href="/privacy">Privacy</a></div>
</body>
</html>"#;

#[test]
fn extracts_article_body_over_navigation() {
    let article = extract(ARTICLE_PAGE).expect("extraction should succeed");

    assert!(article.content_text.contains("voted late on Tuesday"));
    assert!(article.content_text.contains("sign the measure"));
    assert!(!article.content_text.contains("About us"));
    assert!(!article.content_text.contains("Politics"));
}

#[test]
fn derives_title_and_summary_from_original_document() {
    let article = extract(ARTICLE_PAGE).expect("extraction should succeed");

    // the h1 wins over the suffixed <title> element
    assert_eq!(article.title, "City Council Approves Budget");
    assert_eq!(
        article.summary,
        "The council passed the annual budget after a long debate."
    );
}

#[test]
fn related_link_run_is_removed_from_content() {
    let article = extract(ARTICLE_PAGE).expect("extraction should succeed");

    assert!(!article.content_html.contains("/prev"));
    assert!(!article.content_html.contains("/next"));
    assert!(!article.content_text.contains("Previous: Transit plan stalls"));
    // the paragraph after the link run survives
    assert!(article.content_text.contains("Reporting contributed by the city desk."));
}

#[test]
fn decluttering_can_be_disabled() {
    let options = Options {
        declutter_links: false,
        ..Options::default()
    };
    let article = extract_with_options(ARTICLE_PAGE, &options).expect("extraction should succeed");

    assert!(article.content_html.contains("/prev"));
    assert!(article.content_html.contains("/next"));
}

#[test]
fn confidence_reflects_a_clear_winner() {
    let article = extract(ARTICLE_PAGE).expect("extraction should succeed");

    // the winner's score over the mean: navigation containers score zero
    // here, so the ratio sits clearly above one
    assert!(article.score >= 1.0);
}

#[test]
fn content_text_has_no_blank_lines() {
    let article = extract(ARTICLE_PAGE).expect("extraction should succeed");

    assert!(!article.content_text.is_empty());
    assert!(!article.content_text.contains("\n\n"));
}

#[test]
fn content_html_is_serialized_markup() {
    let article = extract(ARTICLE_PAGE).expect("extraction should succeed");

    assert!(article.content_html.contains("<p>"));
    assert!(article.content_html.contains("<h1>"));
}

#[test]
fn empty_input_is_a_parse_error() {
    assert!(matches!(extract(""), Err(Error::ParseError(_))));
    assert!(matches!(extract("  \n \t "), Err(Error::ParseError(_))));
}

#[test]
fn body_without_internal_nodes_is_no_content() {
    let html = "<html><body>loose text with no element structure at all</body></html>";
    assert!(matches!(extract(html), Err(Error::NoContent)));
}

#[test]
fn single_candidate_tree_is_degenerate() {
    // the div is a leaf, so the body is the only registered node and the
    // density distribution has zero spread
    let html = "<html><body><div>Only a little text here.</div></body></html>";
    assert!(matches!(extract(html), Err(Error::DegenerateDistribution)));
}

#[test]
fn tiny_flat_documents_fail_rather_than_guess() {
    // two similar candidates: densities sit too close together for the
    // distribution to produce a positive score
    let html = "<html><body><div><p>Hello world.</p></div></body></html>";
    assert!(matches!(extract(html), Err(Error::NoContent)));
}

#[test]
fn independent_calls_do_not_interfere() {
    // per-call state only: repeated extraction gives identical results
    let first = extract(ARTICLE_PAGE).expect("extraction should succeed");
    let second = extract(ARTICLE_PAGE).expect("extraction should succeed");

    assert_eq!(first, second);
}
