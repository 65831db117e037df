//! XML utility functions for navigating WordprocessingML trees.

use roxmltree::Node;

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use clause_extractor::xml::get_tag_name;
///
/// let xml = r#"<w:body xmlns:w="urn:w"><w:p/></w:body>"#;
/// let doc = Document::parse(xml).unwrap();
/// let p = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(p), "p");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Check if a node is an element with a specific tag name.
pub fn has_tag(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && get_tag_name(node) == tag
}

/// Find the first child element with the given tag name.
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| has_tag(*child, tag))
}

/// Find all child elements with the given tag name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use clause_extractor::xml::find_children;
///
/// let xml = r#"<body><p>1</p><tbl/><p>2</p></body>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let paragraphs: Vec<_> = find_children(doc.root_element(), "p").collect();
/// assert_eq!(paragraphs.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| has_tag(*child, tag))
}
