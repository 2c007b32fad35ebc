//! Static notebook corpora used across harnesses.
//!
//! Each fixture is the full text of an `.ipynb` file in the shape a real
//! frontend writes it. [`write_fixture`] drops one into a temp directory for
//! harnesses that go through the filesystem.

use std::path::{Path, PathBuf};

/// A notebook as JupyterLab saves it: 4.5, cell ids, executed code with a
/// stream and an execute_result output, a raw cell, a markdown attachment.
pub const NOTEBOOK_LAB: &str = r##"{
 "cells": [
  {
   "cell_type": "markdown",
   "id": "1f0c7a3e",
   "metadata": {},
   "source": [
    "# Sales analysis\n",
    "\n",
    "Quarterly numbers, rebuilt for GitHub."
   ]
  },
  {
   "cell_type": "code",
   "execution_count": 1,
   "id": "6b2d9e41",
   "metadata": {
    "tags": ["setup"]
   },
   "outputs": [
    {
     "name": "stdout",
     "output_type": "stream",
     "text": [
      "loaded 4 rows\n"
     ]
    }
   ],
   "source": [
    "import pandas as pd\n",
    "df = pd.read_csv(\"sales.csv\")\n",
    "print(f\"loaded {len(df)} rows\")"
   ]
  },
  {
   "cell_type": "raw",
   "id": "9a4c0d12",
   "metadata": {
    "format": "text/restructuredtext"
   },
   "source": [
    ".. note:: generated"
   ]
  },
  {
   "cell_type": "code",
   "execution_count": 2,
   "id": "c3e5f7a9",
   "metadata": {},
   "outputs": [
    {
     "data": {
      "text/plain": [
       "1234.5"
      ]
     },
     "execution_count": 2,
     "metadata": {},
     "output_type": "execute_result"
    }
   ],
   "source": [
    "df[\"total\"].sum()"
   ]
  },
  {
   "attachments": {
    "chart.png": {
     "image/png": "iVBORw0KGgo="
    }
   },
   "cell_type": "markdown",
   "id": "e8b1a2c4",
   "metadata": {},
   "source": [
    "![chart](attachment:chart.png)"
   ]
  }
 ],
 "metadata": {
  "kernelspec": {
   "display_name": "Python 3",
   "language": "python",
   "name": "python3"
  },
  "language_info": {
   "name": "python",
   "version": "3.11.4"
  }
 },
 "nbformat": 4,
 "nbformat_minor": 5
}
"##;

/// An older 4.2 notebook: no cell ids, sources stored as plain strings,
/// a code cell that was never run.
pub const NOTEBOOK_LEGACY: &str = r#"{
 "cells": [
  {"cell_type": "code", "execution_count": null, "metadata": {}, "outputs": [], "source": "x = 1\ny = 2"},
  {"cell_type": "markdown", "metadata": {"collapsed": true}, "source": "Notes"}
 ],
 "metadata": {"kernelspec": {"name": "python2"}},
 "nbformat": 4,
 "nbformat_minor": 2
}"#;

/// A version 3 notebook, which only the version 3 reader understands.
pub const NOTEBOOK_V3: &str = r#"{
 "metadata": {"name": ""},
 "nbformat": 3,
 "nbformat_minor": 0,
 "worksheets": [{"cells": [], "metadata": {}}]
}"#;

/// Not JSON at all.
pub const NOT_A_NOTEBOOK: &str = "# just a markdown file\n";

/// Write `content` to `dir/name` and return the path.
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("fixture must be writable");
    path
}
