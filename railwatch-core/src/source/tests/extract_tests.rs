use crate::board::RawTriple;
use crate::source::{MarkupExtractor, ParseError, TroubleTableExtractor};
use pretty_assertions::assert_eq;

const PAGE: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/area_trouble.html"));

fn extract(html: &str) -> Result<Vec<RawTriple>, ParseError> {
    TroubleTableExtractor.extract(html.as_bytes())
}

#[test]
fn extracts_every_row_of_the_fixture() {
    let rows = extract(PAGE).unwrap();

    let lines: Vec<_> = rows.iter().map(|r| r.line.as_str()).collect();
    assert_eq!(lines, ["山手線", "京王線", "横浜線", "東急東横線", "相鉄本線"]);
}

#[test]
fn status_prefers_the_trouble_span_and_keeps_its_classes() {
    let rows = extract(PAGE).unwrap();

    assert_eq!(rows[0].status, "列車遅延");
    assert_eq!(rows[0].markers, ["colTrouble"]);
    assert_eq!(rows[1].status, "運転見合わせ");
    assert_eq!(rows[1].markers, ["colTrouble", "important"]);
    assert_eq!(rows[3].markers, ["colTrouble", "resume"]);
}

#[test]
fn plain_status_cell_has_no_markers() {
    let rows = extract(PAGE).unwrap();

    assert_eq!(rows[2].status, "平常運転");
    assert!(rows[2].markers.is_empty());
    assert_eq!(rows[2].detail, "");
}

#[test]
fn detail_text_is_decoded_but_not_trimmed() {
    let rows = extract(PAGE).unwrap();

    assert_eq!(rows[3].detail.trim(), "車両故障の影響で、遅れが出ています。");
    assert_eq!(
        rows[4].detail,
        "強風の影響で、上下線で遅れが出ています。\n詳細は\"駅掲示\"をご確認ください。"
    );
}

#[test]
fn line_cell_without_anchor_uses_cell_text() {
    let html = r#"<div class="trouble"><table><tr>
        <td> 鶴見線 </td><td>平常運転</td><td></td>
    </tr></table></div>"#;

    let rows = extract(html).unwrap();
    assert_eq!(rows[0].line.trim(), "鶴見線");
}

#[test]
fn trailing_partial_row_is_dropped() {
    let html = r#"<div class="trouble"><table>
        <tr><td><a>山手線</a></td><td>平常運転</td><td></td></tr>
        <tr><td><a>京王線</a></td><td>列車遅延</td></tr>
    </table></div>"#;

    let rows = extract(html).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].line, "山手線");
}

#[test]
fn empty_table_yields_no_rows() {
    let rows = extract(r#"<div class="trouble"><table></table></div>"#).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn page_without_container_is_a_parse_error() {
    let err = extract("<html><body><table><tr><td>x</td></tr></table></body></html>").unwrap_err();
    assert_eq!(err, ParseError::MissingContainer { class: "trouble" });
}

#[test]
fn container_without_table_is_a_parse_error() {
    let err = extract(r#"<div class="trouble"><p>準備中</p></div>"#).unwrap_err();
    assert_eq!(err, ParseError::MissingTable { class: "trouble" });
}

#[test]
fn table_after_the_container_is_not_read() {
    let html = r#"<div class="trouble"><p>現在、事故・遅延情報はありません</p></div>
        <div class="ad"><table><tr>
            <td><a>広告</a></td><td>買う</td><td>今すぐ</td>
        </tr></table></div>"#;

    let err = extract(html).unwrap_err();
    assert_eq!(err, ParseError::MissingTable { class: "trouble" });
}

#[test]
fn nested_blocks_inside_the_container_are_searched() {
    let html = r#"<div class="trouble"><div class="note">更新中</div>
        <table><tr><td><a>山手線</a></td><td>平常運転</td><td></td></tr></table>
    </div>"#;

    let rows = extract(html).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].line, "山手線");
}

#[test]
fn non_utf8_bytes_do_not_fail_extraction() {
    let mut page = br#"<div class="trouble"><table><tr><td><a>"#.to_vec();
    page.extend_from_slice(&[0xff, 0xfe]);
    page.extend_from_slice(br#"</a></td><td>x</td><td>y</td></tr></table></div>"#);

    let rows = TroubleTableExtractor.extract(&page).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, "x");
}
