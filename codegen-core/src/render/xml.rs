//! 生成 Mapper 用的极简 XML DOM
//!
//! 只支持元素、属性和文本节点，足以表达 MyBatis Mapper 文档。

use crate::constants::mapper::{INDENT, XML_DECLARATION};

#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// 属性按添加顺序输出
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.append_text(text);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing_value)) => *existing_value = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn append_child(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(XmlNode::Text(text.into()));
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(element) => Some(element),
            XmlNode::Text(_) => None,
        })
    }

    /// 按 `id` 属性查找直接子元素
    pub fn find_by_id(&self, id: &str) -> Option<&XmlElement> {
        self.child_elements()
            .find(|element| element.attribute("id") == Some(id))
    }

    /// 直接子文本节点拼接后的内容
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                XmlNode::Text(text) => Some(text.as_str()),
                XmlNode::Element(_) => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocType {
    pub root: String,
    pub public_id: String,
    pub system_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub doctype: Option<DocType>,
    pub root: XmlElement,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self {
            doctype: None,
            root,
        }
    }

    pub fn with_doctype(mut self, doctype: DocType) -> Self {
        self.doctype = Some(doctype);
        self
    }

    /// 序列化为带缩进的 XML 文本
    pub fn to_xml_string(&self) -> String {
        let mut out = String::new();
        out.push_str(XML_DECLARATION);
        out.push('\n');

        if let Some(doctype) = &self.doctype {
            out.push_str(&format!(
                "<!DOCTYPE {} PUBLIC \"{}\" \"{}\">\n",
                doctype.root, doctype.public_id, doctype.system_id
            ));
        }

        write_element(&mut out, &self.root, 0);
        out
    }
}

fn write_element(out: &mut String, element: &XmlElement, depth: usize) {
    let indent = INDENT.repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attributes {
        out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }

    if element.children.is_empty() {
        out.push_str("/>\n");
        return;
    }

    // 只有单行文本的元素写在同一行: <if test="...">a = #{a},</if>
    if let [XmlNode::Text(text)] = element.children.as_slice() {
        if !text.trim().contains('\n') {
            out.push('>');
            out.push_str(&escape_text(text.trim()));
            out.push_str(&format!("</{}>\n", element.name));
            return;
        }
    }

    out.push_str(">\n");
    for child in &element.children {
        match child {
            XmlNode::Element(child) => write_element(out, child, depth + 1),
            XmlNode::Text(text) => write_text(out, text, depth + 1),
        }
    }
    out.push_str(&indent);
    out.push_str(&format!("</{}>\n", element.name));
}

/// 多行文本逐行缩进，行内的相对缩进保留
fn write_text(out: &mut String, text: &str, depth: usize) {
    let indent = INDENT.repeat(depth);
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        out.push_str(&indent);
        out.push_str(&escape_text(line.trim_end()));
        out.push('\n');
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
